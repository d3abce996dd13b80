use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{Game, GameCreate, GameSummary};

// POST /games/ - Record a game between two existing teams
pub async fn create_game(
    State(pool): State<SqlitePool>,
    AppJson(game): AppJson<GameCreate>,
) -> Result<Json<Game>, ApiError> {
    let game_id = db::insert_game(&pool, &game).await?;

    Ok(Json(game.with_id(game_id)))
}

// POST /games/bulk/
pub async fn create_games_bulk(
    State(pool): State<SqlitePool>,
    AppJson(games): AppJson<Vec<GameCreate>>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let game_ids = db::insert_games(&pool, &games).await?;

    Ok(Json(
        games
            .into_iter()
            .zip(game_ids)
            .map(|(game, game_id)| game.with_id(game_id))
            .collect(),
    ))
}

// GET /games/ - List game dates and scores
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let games = db::get_all_games(&pool).await?;

    Ok(Json(games))
}
