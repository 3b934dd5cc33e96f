// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Lifeboard - persistence API for a Conway's Game of Life client.
//!
//! The cellular-automaton stepping happens in the client; this server only
//! persists and retrieves board snapshots in a file-backed SQLite database.
//!
//! # HTTP surface
//!
//! All routes live under `/api`. Responses are JSON.
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/ping` | - | `"pong"` |
//! | GET | `/api/boards` | - | Array of [`models::GameSummary`], ordered by id |
//! | POST | `/api/board` | [`models::SaveGamePayload`] | `{"id": <new id>}` |
//! | GET | `/api/board/{id}` | - | Full [`models::SavedGame`]; 404 if absent |
//! | PUT | `/api/board/{id}` | [`models::SaveGamePayload`] | Echoed payload |
//!
//! Malformed request bodies are 400. Store and serialization failures are
//! 500 with the error text as the plain-text body - a development-grade
//! surface, like the wide-open CORS policy.
//!
//! # Persisted schema
//!
//! Two tables joined by foreign key: `game_settings` holds the per-game
//! configuration (every column nullable), `game_states` holds the snapshot
//! with living cells, board, and virtual board stored as JSON text.
//! Migrations are embedded at compile time and applied at startup; a
//! failure to open or migrate the store is fatal.
//!
//! # Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `LIFEBOARD_DATABASE_PATH` | No | `.data/lifeboard.db` | SQLite database file |
//! | `LIFEBOARD_PORT` | No | `8080` | HTTP listen port (all interfaces) |
//!
//! # Modules
//!
//! - [`config`]: Server configuration from environment variables
//! - [`db`]: SQLite persistence for game states and settings
//! - [`error`]: Error types and their HTTP status mapping
//! - [`handlers`]: HTTP request handlers
//! - [`models`]: Domain model shared with the client
//! - [`server`]: Router construction and serve loop

#![deny(missing_docs)]

/// Server configuration loaded from environment variables.
pub mod config;

/// SQLite persistence for game states and settings.
pub mod db;

/// Error types and their HTTP status mapping.
pub mod error;

/// HTTP request handlers for the board API.
pub mod handlers;

/// Domain model shared with the client.
pub mod models;

/// Router construction and serve loop.
pub mod server;

pub use config::Config;
pub use error::Error;
