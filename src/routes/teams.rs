use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{Team, TeamCreate, TeamSummary};

// POST /teams/ - Create a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    AppJson(team): AppJson<TeamCreate>,
) -> Result<Json<Team>, ApiError> {
    let team_id = db::insert_team(&pool, &team).await?;

    Ok(Json(team.with_id(team_id)))
}

// POST /teams/bulk/ - Create many teams, returned in input order
pub async fn create_teams_bulk(
    State(pool): State<SqlitePool>,
    AppJson(teams): AppJson<Vec<TeamCreate>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let team_ids = db::insert_teams(&pool, &teams).await?;

    Ok(Json(
        teams
            .into_iter()
            .zip(team_ids)
            .map(|(team, team_id)| team.with_id(team_id))
            .collect(),
    ))
}

// GET /teams/ - List team names and cities
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamSummary>>, ApiError> {
    let teams = db::get_all_teams(&pool).await?;

    Ok(Json(teams))
}
