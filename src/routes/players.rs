use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{Player, PlayerCreate, PlayerSummary};

// POST /players/ - Create a player, optionally assigned to a team
pub async fn create_player(
    State(pool): State<SqlitePool>,
    AppJson(player): AppJson<PlayerCreate>,
) -> Result<Json<Player>, ApiError> {
    let player_id = db::insert_player(&pool, &player).await?;

    Ok(Json(player.with_id(player_id)))
}

// POST /players/bulk/ - Create many players
pub async fn create_players_bulk(
    State(pool): State<SqlitePool>,
    AppJson(players): AppJson<Vec<PlayerCreate>>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let player_ids = db::insert_players(&pool, &players).await?;

    Ok(Json(
        players
            .into_iter()
            .zip(player_ids)
            .map(|(player, player_id)| player.with_id(player_id))
            .collect(),
    ))
}

// GET /players/ - List players (name and position only)
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayerSummary>>, ApiError> {
    let players = db::get_all_players(&pool).await?;

    Ok(Json(players))
}
