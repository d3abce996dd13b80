use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{TeamStat, TeamStatCreate, TeamStatSummary};

// POST /team-stats/ - Record one team's totals for one game
pub async fn create_team_stat(
    State(pool): State<SqlitePool>,
    AppJson(stat): AppJson<TeamStatCreate>,
) -> Result<Json<TeamStat>, ApiError> {
    let team_stat_id = db::insert_team_stat(&pool, &stat).await?;

    Ok(Json(stat.with_id(team_stat_id)))
}

// POST /team-stats/bulk/
pub async fn create_team_stats_bulk(
    State(pool): State<SqlitePool>,
    AppJson(stats): AppJson<Vec<TeamStatCreate>>,
) -> Result<Json<Vec<TeamStat>>, ApiError> {
    let team_stat_ids = db::insert_team_stats(&pool, &stats).await?;

    Ok(Json(
        stats
            .into_iter()
            .zip(team_stat_ids)
            .map(|(stat, team_stat_id)| stat.with_id(team_stat_id))
            .collect(),
    ))
}

// GET /team-stats/
pub async fn get_team_stats(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamStatSummary>>, ApiError> {
    let stats = db::get_all_team_stats(&pool).await?;

    Ok(Json(stats))
}
