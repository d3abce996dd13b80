use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{PlayerStat, PlayerStatCreate, PlayerStatSummary};

// POST /player-stats/ - Record one player's line for one game
pub async fn create_player_stat(
    State(pool): State<SqlitePool>,
    AppJson(stat): AppJson<PlayerStatCreate>,
) -> Result<Json<PlayerStat>, ApiError> {
    let stat_id = db::insert_player_stat(&pool, &stat).await?;

    Ok(Json(stat.with_id(stat_id)))
}

// POST /player-stats/bulk/
pub async fn create_player_stats_bulk(
    State(pool): State<SqlitePool>,
    AppJson(stats): AppJson<Vec<PlayerStatCreate>>,
) -> Result<Json<Vec<PlayerStat>>, ApiError> {
    let stat_ids = db::insert_player_stats(&pool, &stats).await?;

    Ok(Json(
        stats
            .into_iter()
            .zip(stat_ids)
            .map(|(stat, stat_id)| stat.with_id(stat_id))
            .collect(),
    ))
}

// GET /player-stats/
pub async fn get_player_stats(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayerStatSummary>>, ApiError> {
    let stats = db::get_all_player_stats(&pool).await?;

    Ok(Json(stats))
}
