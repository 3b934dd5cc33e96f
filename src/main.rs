// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Lifeboard - Game of Life board persistence server.
//!
//! An HTTP API responsible for:
//! - Saving board snapshots together with their settings
//! - Listing saved games
//! - Loading a saved game for resuming play
//! - Updating a saved game in place

use tracing::{info, warn};

use lifeboard::config::Config;
use lifeboard::handlers::AppState;
use lifeboard::{db, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifeboard=info".into()),
        )
        .init();

    // Load .env file if present
    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env file loaded: {}", e);
    }

    // Load configuration
    let config = Config::from_env()?;

    info!(
        listen_addr = %config.listen_addr,
        database_path = %config.database_path.display(),
        "Starting lifeboard"
    );

    // Open the store, creating the file and applying migrations if needed.
    // The server must not accept requests without a working store.
    let pool = db::connect(&config.database_path).await?;

    info!("Database schema verified");

    let state = AppState { pool: pool.clone() };
    server::run_server(config.listen_addr, state).await?;

    pool.close().await;

    info!("Lifeboard shut down");

    Ok(())
}
