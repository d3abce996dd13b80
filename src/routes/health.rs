use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use crate::db;

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: i64,
}

// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the NFL API",
    })
}

// GET /health - Always 200; `status` reports whether the database answers
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match db::ping(&pool).await {
        Ok(()) => ("ok", "up"),
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            ("degraded", "down")
        }
    };

    let response = HealthResponse {
        status,
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
