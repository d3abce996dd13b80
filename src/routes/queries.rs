//! Handlers for the fixed analytical routes `/Query1` .. `/Query15`.
//!
//! List queries answer with an array, empty when nothing matches. Top-1
//! queries answer with a single object, or 404 when there is no row to rank.

use axum::{extract::State, response::Json};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db::queries as db;
use crate::error::ApiError;
use crate::extract::AppQuery;
use crate::models::*;

#[derive(Debug, Deserialize)]
pub struct TeamIdQuery {
    pub team_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct PlayerIdQuery {
    pub player_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GameIdQuery {
    pub game_id: i64,
}

// GET /Query1?team_id=1 - Players on a team
pub async fn team_roster(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<TeamIdQuery>,
) -> Result<Json<Vec<TeamRosterPlayer>>, ApiError> {
    Ok(Json(db::get_team_roster(&pool, params.team_id).await?))
}

// GET /Query2 - Teams with their coaches
pub async fn team_coaches(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamCoach>>, ApiError> {
    Ok(Json(db::get_team_coaches(&pool).await?))
}

// GET /Query3 - Games with both team names
pub async fn game_matchups(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<GameMatchup>>, ApiError> {
    Ok(Json(db::get_game_matchups(&pool).await?))
}

// GET /Query4 - Most touchdowns in one game
pub async fn touchdown_leader(
    State(pool): State<SqlitePool>,
) -> Result<Json<TouchdownLeader>, ApiError> {
    let leader = db::get_touchdown_leader(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(leader))
}

// GET /Query5 - Most passing yards in one game
pub async fn passing_leader(
    State(pool): State<SqlitePool>,
) -> Result<Json<PassingLeader>, ApiError> {
    let leader = db::get_passing_leader(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(leader))
}

// GET /Query6 - Total touchdowns per player
pub async fn touchdown_totals(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayerTouchdownTotal>>, ApiError> {
    Ok(Json(db::get_touchdown_totals(&pool).await?))
}

// GET /Query7 - Highest combined score
pub async fn highest_scoring_game(
    State(pool): State<SqlitePool>,
) -> Result<Json<HighestScoringGame>, ApiError> {
    let game = db::get_highest_scoring_game(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(game))
}

// GET /Query8?player_id=1 - Games a player appeared in
pub async fn player_games(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<PlayerIdQuery>,
) -> Result<Json<Vec<PlayerGameLine>>, ApiError> {
    Ok(Json(db::get_player_games(&pool, params.player_id).await?))
}

// GET /Query9 - Players per team
pub async fn player_counts(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamPlayerCount>>, ApiError> {
    Ok(Json(db::get_player_counts(&pool).await?))
}

// GET /Query10 - Most team yards in one game
pub async fn team_yards_leader(
    State(pool): State<SqlitePool>,
) -> Result<Json<TeamYardsLeader>, ApiError> {
    let leader = db::get_team_yards_leader(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(leader))
}

// GET /Query11 - Average yards per team
pub async fn team_average_yards(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamAverageYards>>, ApiError> {
    Ok(Json(db::get_team_average_yards(&pool).await?))
}

// GET /Query12 - Total penalties per team
pub async fn team_penalty_totals(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamPenaltyTotal>>, ApiError> {
    Ok(Json(db::get_team_penalty_totals(&pool).await?))
}

// GET /Query13 - Most rushing yards in one game
pub async fn rushing_leader(
    State(pool): State<SqlitePool>,
) -> Result<Json<RushingLeader>, ApiError> {
    let leader = db::get_rushing_leader(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(leader))
}

// GET /Query14?game_id=1 - Top touchdown scorer in a game
pub async fn game_top_performer(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<GameIdQuery>,
) -> Result<Json<GameTopPerformer>, ApiError> {
    let performer = db::get_game_top_performer(&pool, params.game_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(performer))
}

// GET /Query15 - Games played and wins per team
pub async fn team_records(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamRecord>>, ApiError> {
    Ok(Json(db::get_team_records(&pool).await?))
}
