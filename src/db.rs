// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SQLite persistence for game states and settings.
//!
//! Two tables joined by foreign key: `game_settings` holds the per-game
//! configuration (every column nullable), `game_states` holds the snapshot
//! with living cells, board, and virtual board as JSON text columns.
//!
//! The two-statement write sequences (settings insert + state insert,
//! settings update + state update) each run inside a single transaction so
//! a mid-sequence failure cannot leave an orphaned settings row.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::error::Error;
use crate::models::{GameSummary, SaveGamePayload, SavedGame, Settings};

/// Embedded schema migrations, applied by [`connect`] and by tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open (creating if absent) the database file and apply migrations.
///
/// Creates parent directories as needed. Any failure here is fatal to
/// startup: the server must not accept requests without a working store.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let url = format!("sqlite:{}?mode=rwc", path.to_string_lossy());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// Summary row from the list query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameSummaryRow {
    /// Game state identifier.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub board_desc: String,
    /// Simulation step count at save time.
    pub generations: i64,
    /// Whether the simulation was running at save time.
    pub is_playing: bool,
    /// Cached number of living cells.
    pub living_cell_count: i64,
}

impl From<GameSummaryRow> for GameSummary {
    fn from(row: GameSummaryRow) -> Self {
        GameSummary {
            id: row.id,
            title: row.title,
            description: row.board_desc,
            generations: row.generations,
            is_playing: row.is_playing,
            living_cell_count: row.living_cell_count,
        }
    }
}

/// Full row from the load query (game state joined with its settings).
///
/// Grid columns are still JSON text here; [`SavedGameRow::into_saved_game`]
/// decodes them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SavedGameRow {
    /// Game state identifier.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub board_desc: String,
    /// Living cells as JSON text.
    pub living_cells: String,
    /// Board grid as JSON text.
    pub board: String,
    /// Virtual board grid as JSON text.
    pub virtual_board: String,
    /// Simulation step count at save time.
    pub generations: i64,
    /// Whether the simulation was running at save time.
    pub is_playing: bool,
    /// Cached number of living cells.
    pub living_cell_count: i64,
    /// Settings: square board edge length.
    pub board_size: Option<i64>,
    /// Settings: speed tier label.
    pub game_speed: Option<String>,
    /// Settings: generations stepped per advance action.
    pub gens_per_advance: Option<i64>,
    /// Settings: whether board edges wrap around.
    pub wrap_around: Option<bool>,
}

impl SavedGameRow {
    /// Decode the JSON text columns into the structured response shape.
    ///
    /// An empty blob decodes to an empty value rather than an error; the
    /// original client stored empty strings for boards it had not yet
    /// serialized.
    pub fn into_saved_game(self) -> Result<SavedGame, serde_json::Error> {
        Ok(SavedGame {
            id: self.id,
            title: self.title,
            description: self.board_desc,
            living_cells: decode_blob(&self.living_cells)?,
            board: decode_blob(&self.board)?,
            virtual_board: decode_blob(&self.virtual_board)?,
            generations: self.generations,
            is_playing: self.is_playing,
            living_cell_count: self.living_cell_count,
            settings: Settings {
                board_size: self.board_size,
                game_speed: self.game_speed,
                generations_per_advance: self.gens_per_advance,
                wrap_around: self.wrap_around,
            },
        })
    }
}

fn decode_blob<T>(raw: &str) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    if raw.is_empty() {
        Ok(T::default())
    } else {
        serde_json::from_str(raw)
    }
}

/// Insert a new game state and its settings row, returning the new game
/// state identifier.
pub async fn save_game(pool: &SqlitePool, payload: &SaveGamePayload) -> Result<i64, Error> {
    let living_cells = serde_json::to_string(&payload.living_cells)?;
    let board = serde_json::to_string(&payload.board)?;
    let virtual_board = serde_json::to_string(&payload.virtual_board)?;

    let mut tx = pool.begin().await?;

    let settings = sqlx::query(
        r#"
        INSERT INTO game_settings (board_size, game_speed, gens_per_advance, wrap_around)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(payload.settings.board_size)
    .bind(payload.settings.game_speed.as_deref())
    .bind(payload.settings.generations_per_advance)
    .bind(payload.settings.wrap_around)
    .execute(&mut *tx)
    .await?;

    let settings_id = settings.last_insert_rowid();

    let state = sqlx::query(
        r#"
        INSERT INTO game_states (title, board_desc, living_cells, board, virtual_board,
                                 generations, is_playing, living_cell_count, settings_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&living_cells)
    .bind(&board)
    .bind(&virtual_board)
    .bind(payload.generations)
    .bind(payload.is_playing)
    .bind(payload.living_cell_count)
    .bind(settings_id)
    .execute(&mut *tx)
    .await?;

    let id = state.last_insert_rowid();

    tx.commit().await?;

    Ok(id)
}

/// Update an existing game state and a subset of its settings.
///
/// Only board size, speed, and wrap-around change on the settings row;
/// gens_per_advance stays fixed at its save-time value. Title, description,
/// and living cells change on the state row. An unknown identifier updates
/// zero rows and is not an error.
pub async fn update_game(
    pool: &SqlitePool,
    id: i64,
    payload: &SaveGamePayload,
) -> Result<(), Error> {
    let living_cells = serde_json::to_string(&payload.living_cells)?;

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE game_settings
        SET board_size = ?, game_speed = ?, wrap_around = ?
        WHERE id = (SELECT settings_id FROM game_states WHERE id = ?)
        "#,
    )
    .bind(payload.settings.board_size)
    .bind(payload.settings.game_speed.as_deref())
    .bind(payload.settings.wrap_around)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE game_states
        SET title = ?, board_desc = ?, living_cells = ?
        WHERE id = ?
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&living_cells)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// List all saved games, ordered by identifier ascending.
pub async fn list_games(pool: &SqlitePool) -> Result<Vec<GameSummaryRow>, Error> {
    let rows = sqlx::query_as::<_, GameSummaryRow>(
        r#"
        SELECT id, title, board_desc, generations, is_playing, living_cell_count
        FROM game_states
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a saved game with its settings by identifier.
pub async fn get_game(pool: &SqlitePool, id: i64) -> Result<Option<SavedGameRow>, Error> {
    let row = sqlx::query_as::<_, SavedGameRow>(
        r#"
        SELECT gs.id, gs.title, gs.board_desc, gs.living_cells, gs.board, gs.virtual_board,
               gs.generations, gs.is_playing, gs.living_cell_count,
               s.board_size, s.game_speed, s.gens_per_advance, s.wrap_around
        FROM game_states gs
        JOIN game_settings s ON gs.settings_id = s.id
        WHERE gs.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
