//! REST API over an American-football league database: teams, players,
//! coaches, games and per-game statistics, plus a fixed set of analytical
//! queries.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

/// Build the full router over an already-initialised pool.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::health::welcome))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/teams/", get(routes::teams::get_teams).post(routes::teams::create_team))
        .route("/teams/bulk/", post(routes::teams::create_teams_bulk))

        // Player endpoints
        .route("/players/", get(routes::players::get_players).post(routes::players::create_player))
        .route("/players/bulk/", post(routes::players::create_players_bulk))

        // Coach endpoints
        .route("/coaches/", get(routes::coaches::get_coaches).post(routes::coaches::create_coach))
        .route("/coaches/bulk/", post(routes::coaches::create_coaches_bulk))

        // Game endpoints
        .route("/games/", get(routes::games::get_games).post(routes::games::create_game))
        .route("/games/bulk/", post(routes::games::create_games_bulk))

        // Stat endpoints
        .route("/player-stats/", get(routes::player_stats::get_player_stats).post(routes::player_stats::create_player_stat))
        .route("/player-stats/bulk/", post(routes::player_stats::create_player_stats_bulk))
        .route("/team-stats/", get(routes::team_stats::get_team_stats).post(routes::team_stats::create_team_stat))
        .route("/team-stats/bulk/", post(routes::team_stats::create_team_stats_bulk))

        // Analytical queries
        .route("/Query1", get(routes::queries::team_roster))
        .route("/Query2", get(routes::queries::team_coaches))
        .route("/Query3", get(routes::queries::game_matchups))
        .route("/Query4", get(routes::queries::touchdown_leader))
        .route("/Query5", get(routes::queries::passing_leader))
        .route("/Query6", get(routes::queries::touchdown_totals))
        .route("/Query7", get(routes::queries::highest_scoring_game))
        .route("/Query8", get(routes::queries::player_games))
        .route("/Query9", get(routes::queries::player_counts))
        .route("/Query10", get(routes::queries::team_yards_leader))
        .route("/Query11", get(routes::queries::team_average_yards))
        .route("/Query12", get(routes::queries::team_penalty_totals))
        .route("/Query13", get(routes::queries::rushing_leader))
        .route("/Query14", get(routes::queries::game_top_performer))
        .route("/Query15", get(routes::queries::team_records))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
