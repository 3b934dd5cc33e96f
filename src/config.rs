// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for lifeboard.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// HTTP listen address (all interfaces).
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path = PathBuf::from(
            std::env::var("LIFEBOARD_DATABASE_PATH")
                .unwrap_or_else(|_| ".data/lifeboard.db".to_string()),
        );

        let port: u16 = std::env::var("LIFEBOARD_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let listen_addr = SocketAddr::from(([0, 0, 0, 0], port));

        Ok(Self {
            database_path,
            listen_addr,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The port number is invalid.
    #[error("Invalid port number")]
    InvalidPort,
}
