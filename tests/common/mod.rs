#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a fresh in-memory database. One connection, so every
/// request in a test sees the same data.
pub async fn test_app() -> Router {
    let pool = nfl_stats_api::db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open");
    nfl_stats_api::app(pool)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn team(name: &str, city: &str) -> Value {
    json!({
        "team_name": name,
        "city": city,
        "stadium": format!("{name} Field"),
        "founded_year": 1990
    })
}

pub fn player(first: &str, last: &str, team_id: Option<i64>) -> Value {
    json!({
        "first_name": first,
        "last_name": last,
        "position": "QB",
        "jersey_number": 12,
        "team_id": team_id
    })
}

pub fn game(home: i64, away: i64, date: &str, home_score: i32, away_score: i32) -> Value {
    json!({
        "home_team_id": home,
        "away_team_id": away,
        "game_date": date,
        "home_team_score": home_score,
        "away_team_score": away_score
    })
}

pub fn player_stat(player_id: i64, game_id: i64, touchdowns: i32, passing: i32, rushing: i32) -> Value {
    json!({
        "player_id": player_id,
        "game_id": game_id,
        "touchdowns": touchdowns,
        "passing_yards": passing,
        "rushing_yards": rushing
    })
}

pub fn team_stat(team_id: i64, game_id: i64, yards: i32, touchdowns: i32, penalties: i32) -> Value {
    json!({
        "team_id": team_id,
        "game_id": game_id,
        "total_yards": yards,
        "total_touchdowns": touchdowns,
        "penalties": penalties
    })
}

/// Create a row and return the id under `id_field`.
pub async fn create(app: &Router, uri: &str, body: Value, id_field: &str) -> i64 {
    let (status, created) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::OK, "create on {uri} failed: {created}");
    created[id_field].as_i64().unwrap()
}
