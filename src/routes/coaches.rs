use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{Coach, CoachCreate, CoachSummary};

// POST /coaches/
pub async fn create_coach(
    State(pool): State<SqlitePool>,
    AppJson(coach): AppJson<CoachCreate>,
) -> Result<Json<Coach>, ApiError> {
    let coach_id = db::insert_coach(&pool, &coach).await?;

    Ok(Json(coach.with_id(coach_id)))
}

// POST /coaches/bulk/
pub async fn create_coaches_bulk(
    State(pool): State<SqlitePool>,
    AppJson(coaches): AppJson<Vec<CoachCreate>>,
) -> Result<Json<Vec<Coach>>, ApiError> {
    let coach_ids = db::insert_coaches(&pool, &coaches).await?;

    Ok(Json(
        coaches
            .into_iter()
            .zip(coach_ids)
            .map(|(coach, coach_id)| coach.with_id(coach_id))
            .collect(),
    ))
}

// GET /coaches/
pub async fn get_coaches(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CoachSummary>>, ApiError> {
    let coaches = db::get_all_coaches(&pool).await?;

    Ok(Json(coaches))
}
