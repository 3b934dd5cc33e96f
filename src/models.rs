// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Domain model for saved Game of Life boards.
//!
//! The simulation runs client-side; these are snapshot shapes only. All
//! types serialize with camelCase field names to match the client's wire
//! format, and request payloads tolerate missing fields the way the client
//! sends them (absent fields default).

use serde::{Deserialize, Serialize};

/// Grid position of a single living cell.
///
/// No uniqueness is enforced; duplicate positions are stored as sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
}

/// Per-game configuration stored in its own table, one row per saved game.
///
/// Every field is independently optional; a partial settings object is
/// valid. Unset fields are omitted from responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Square board edge length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_size: Option<i64>,
    /// Qualitative speed tier label (e.g. "slow", "fast").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_speed: Option<String>,
    /// Generations stepped per advance action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generations_per_advance: Option<i64>,
    /// Whether board edges wrap around.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_around: Option<bool>,
}

/// Request body for the save and update operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveGamePayload {
    /// Client-side identifier, if any. Ignored by the save path.
    pub id: Option<i64>,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Positions of all living cells.
    pub living_cells: Vec<Cell>,
    /// Primary board grid, row-major.
    pub board: Vec<Vec<bool>>,
    /// Secondary working grid maintained by the client, passed through
    /// opaquely.
    pub virtual_board: Vec<Vec<bool>>,
    /// Simulation step count at save time.
    pub generations: i64,
    /// Whether the simulation was running at save time.
    pub is_playing: bool,
    /// Cached number of living cells.
    pub living_cell_count: i64,
    /// Associated settings.
    pub settings: Settings,
}

/// Full saved game returned by the load operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Game state identifier.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Positions of all living cells.
    pub living_cells: Vec<Cell>,
    /// Primary board grid, row-major.
    pub board: Vec<Vec<bool>>,
    /// Secondary working grid maintained by the client.
    pub virtual_board: Vec<Vec<bool>>,
    /// Simulation step count at save time.
    pub generations: i64,
    /// Whether the simulation was running at save time.
    pub is_playing: bool,
    /// Cached number of living cells.
    pub living_cell_count: i64,
    /// Associated settings.
    pub settings: Settings,
}

/// List-view element. Grids and settings are omitted for payload economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Game state identifier.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Simulation step count at save time.
    pub generations: i64,
    /// Whether the simulation was running at save time.
    pub is_playing: bool,
    /// Cached number of living cells.
    pub living_cell_count: i64,
}

/// Response body for a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Identifier of the newly created game state.
    pub id: i64,
}
