// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Query-layer tests against an in-memory SQLite database.

mod common;

use common::{sample_payload, test_pool};
use lifeboard::db;
use lifeboard::models::{Cell, Settings};

#[tokio::test]
async fn save_then_get_round_trips() {
    let pool = test_pool().await;
    let payload = sample_payload();

    let id = db::save_game(&pool, &payload).await.expect("save failed");

    let game = db::get_game(&pool, id)
        .await
        .expect("get failed")
        .expect("row missing")
        .into_saved_game()
        .expect("decode failed");

    assert_eq!(game.id, id);
    assert_eq!(game.title, payload.title);
    assert_eq!(game.description, payload.description);
    assert_eq!(game.living_cells, payload.living_cells);
    assert_eq!(game.board, payload.board);
    assert_eq!(game.virtual_board, payload.virtual_board);
    assert_eq!(game.generations, payload.generations);
    assert_eq!(game.is_playing, payload.is_playing);
    assert_eq!(game.living_cell_count, payload.living_cell_count);
    assert_eq!(game.settings, payload.settings);
}

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let pool = test_pool().await;

    let row = db::get_game(&pool, 999).await.expect("get failed");

    assert!(row.is_none());
}

#[tokio::test]
async fn list_with_no_saves_is_empty() {
    let pool = test_pool().await;

    let rows = db::list_games(&pool).await.expect("list failed");

    assert!(rows.is_empty());
}

#[tokio::test]
async fn list_is_ordered_by_id_ascending() {
    let pool = test_pool().await;

    let mut first = sample_payload();
    first.title = "first".to_string();
    let mut second = sample_payload();
    second.title = "second".to_string();

    let first_id = db::save_game(&pool, &first).await.expect("save failed");
    let second_id = db::save_game(&pool, &second).await.expect("save failed");

    let rows = db::list_games(&pool).await.expect("list failed");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first_id);
    assert_eq!(rows[0].title, "first");
    assert_eq!(rows[1].id, second_id);
    assert_eq!(rows[1].title, "second");
    assert!(first_id < second_id);
}

#[tokio::test]
async fn update_changes_state_and_settings() {
    let pool = test_pool().await;
    let id = db::save_game(&pool, &sample_payload())
        .await
        .expect("save failed");

    let mut updated = sample_payload();
    updated.title = "glider (edited)".to_string();
    updated.description = "moved two steps".to_string();
    updated.living_cells = vec![Cell { x: 5, y: 5 }];
    updated.settings = Settings {
        board_size: Some(60),
        game_speed: Some("fast".to_string()),
        generations_per_advance: Some(99),
        wrap_around: Some(false),
    };

    db::update_game(&pool, id, &updated)
        .await
        .expect("update failed");

    let game = db::get_game(&pool, id)
        .await
        .expect("get failed")
        .expect("row missing")
        .into_saved_game()
        .expect("decode failed");

    assert_eq!(game.title, "glider (edited)");
    assert_eq!(game.description, "moved two steps");
    assert_eq!(game.living_cells, vec![Cell { x: 5, y: 5 }]);
    assert_eq!(game.settings.board_size, Some(60));
    assert_eq!(game.settings.game_speed.as_deref(), Some("fast"));
    assert_eq!(game.settings.wrap_around, Some(false));
    // The advance rate is fixed at save time; 99 from the update payload
    // must not land.
    assert_eq!(game.settings.generations_per_advance, Some(1));
    // Update does not touch the grids or counters.
    assert_eq!(game.board, sample_payload().board);
    assert_eq!(game.generations, 42);
    assert_eq!(game.living_cell_count, 5);
}

#[tokio::test]
async fn update_unknown_id_succeeds() {
    let pool = test_pool().await;

    db::update_game(&pool, 12345, &sample_payload())
        .await
        .expect("update of unknown id must not error");

    let rows = db::list_games(&pool).await.expect("list failed");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn all_optional_settings_round_trip_as_none() {
    let pool = test_pool().await;

    let mut payload = sample_payload();
    payload.settings = Settings::default();

    let id = db::save_game(&pool, &payload).await.expect("save failed");
    let game = db::get_game(&pool, id)
        .await
        .expect("get failed")
        .expect("row missing")
        .into_saved_game()
        .expect("decode failed");

    assert_eq!(game.settings, Settings::default());
}

#[tokio::test]
async fn empty_living_cells_blob_decodes_to_empty_list() {
    let pool = test_pool().await;

    // Rows written by older clients carried empty strings instead of JSON.
    let settings = sqlx::query("INSERT INTO game_settings (board_size) VALUES (NULL)")
        .execute(&pool)
        .await
        .expect("settings insert failed");

    sqlx::query(
        "INSERT INTO game_states (title, board_desc, living_cells, board, virtual_board, \
         generations, is_playing, living_cell_count, settings_id) \
         VALUES ('legacy', '', '', '', '', 0, 0, 0, ?)",
    )
    .bind(settings.last_insert_rowid())
    .execute(&pool)
    .await
    .expect("state insert failed");

    let rows = db::list_games(&pool).await.expect("list failed");
    let game = db::get_game(&pool, rows[0].id)
        .await
        .expect("get failed")
        .expect("row missing")
        .into_saved_game()
        .expect("empty blobs must decode");

    assert!(game.living_cells.is_empty());
    assert!(game.board.is_empty());
    assert!(game.virtual_board.is_empty());
}

#[tokio::test]
async fn failed_save_leaves_no_settings_row() {
    let pool = test_pool().await;

    // Force the second insert of the save sequence to fail.
    sqlx::query("DROP TABLE game_states")
        .execute(&pool)
        .await
        .expect("drop failed");

    let result = db::save_game(&pool, &sample_payload()).await;
    assert!(result.is_err());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM game_settings")
        .fetch_one(&pool)
        .await
        .expect("count failed");

    assert_eq!(count, 0, "settings insert must roll back with the state insert");
}

#[tokio::test]
async fn connect_creates_database_file() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("nested").join("boards.db");

    let pool = db::connect(&path).await.expect("connect failed");

    assert!(path.exists());

    // The schema is usable straight away.
    let id = db::save_game(&pool, &sample_payload())
        .await
        .expect("save failed");
    assert!(id > 0);

    pool.close().await;
}
