// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shared test fixtures.

use lifeboard::models::{Cell, SaveGamePayload, Settings};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Open a fresh in-memory database with the schema applied.
///
/// A single connection keeps every query in the test on the same in-memory
/// database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    lifeboard::db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A representative save payload: a glider with full settings.
pub fn sample_payload() -> SaveGamePayload {
    SaveGamePayload {
        id: None,
        title: "glider".to_string(),
        description: "a glider heading south-east".to_string(),
        living_cells: vec![
            Cell { x: 1, y: 0 },
            Cell { x: 2, y: 1 },
            Cell { x: 0, y: 2 },
            Cell { x: 1, y: 2 },
            Cell { x: 2, y: 2 },
        ],
        board: vec![
            vec![false, true, false],
            vec![false, false, true],
            vec![true, true, true],
        ],
        virtual_board: vec![
            vec![false, false, false],
            vec![false, false, false],
            vec![false, false, false],
        ],
        generations: 42,
        is_playing: false,
        living_cell_count: 5,
        settings: Settings {
            board_size: Some(30),
            game_speed: Some("normal".to_string()),
            generations_per_advance: Some(1),
            wrap_around: Some(true),
        },
    }
}
