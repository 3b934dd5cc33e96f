// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP request handlers for the board API.
//!
//! Each handler decodes the request, runs one operation against the query
//! layer, and encodes the result. Errors surface immediately through the
//! crate [`Error`](crate::error::Error) mapping; there are no retries.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db;
use crate::error::{Error, Result};
use crate::models::{GameSummary, SaveGamePayload, SaveResponse, SavedGame};

/// Shared state for request handlers.
///
/// The pool is the single storage handle for the process. It is injected
/// through axum state rather than held as a global so handlers stay
/// independently testable.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool shared by all handlers.
    pub pool: SqlitePool,
}

/// Liveness probe.
pub async fn ping() -> Json<&'static str> {
    Json("pong")
}

/// List summaries of every saved game, ordered by identifier ascending.
pub async fn list_boards(State(state): State<AppState>) -> Result<Json<Vec<GameSummary>>> {
    let rows = db::list_games(&state.pool).await?;

    debug!(count = rows.len(), "Listed saved boards");

    Ok(Json(rows.into_iter().map(GameSummary::from).collect()))
}

/// Save a new game state together with its settings row.
pub async fn save_board(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveGamePayload>, JsonRejection>,
) -> Result<Json<SaveResponse>> {
    let Json(payload) = payload.map_err(|e| Error::InvalidRequest(e.body_text()))?;

    let id = db::save_game(&state.pool, &payload).await?;

    info!(id, title = %payload.title, "Saved board");

    Ok(Json(SaveResponse { id }))
}

/// Load a full saved game by identifier. 404 if no such game exists.
pub async fn load_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SavedGame>> {
    let row = db::get_game(&state.pool, id).await?.ok_or(Error::NotFound)?;

    debug!(id, "Loaded board");

    Ok(Json(row.into_saved_game()?))
}

/// Update an existing game state and a subset of its settings.
///
/// Responds with the decoded payload, not a re-read of persisted state.
/// There is no existence check: an unknown identifier updates zero rows and
/// still reports success.
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<SaveGamePayload>, JsonRejection>,
) -> Result<Json<SaveGamePayload>> {
    let Json(payload) = payload.map_err(|e| Error::InvalidRequest(e.body_text()))?;

    db::update_game(&state.pool, id, &payload).await?;

    info!(id, title = %payload.title, "Updated board");

    Ok(Json(payload))
}
