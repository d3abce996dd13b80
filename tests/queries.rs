mod common;

use axum::{http::StatusCode, Router};
use common::*;
use serde_json::json;

/// Two teams, three players (one unassigned), two games, stat lines for
/// both games.
async fn seeded_app() -> Router {
    let app = test_app().await;

    post(&app, "/teams/bulk/", json!([team("Hawks", "Metro"), team("Owls", "Harbor"), team("Bears", "Ridge")])).await;
    post(
        &app,
        "/players/bulk/",
        json!([
            player("Sam", "Reed", Some(1)),
            player("Lee", "Hart", Some(1)),
            player("Max", "Dunn", Some(2)),
            player("Free", "Agent", None),
        ]),
    )
    .await;
    post(
        &app,
        "/coaches/bulk/",
        json!([
            { "first_name": "Ann", "last_name": "Cole", "role": "Head Coach", "team_id": 1 },
            { "first_name": "Bo", "last_name": "Pike", "role": "Offensive Coordinator", "team_id": 2 },
            { "first_name": "Cy", "last_name": "Vale", "role": "Consultant" },
        ]),
    )
    .await;
    post(
        &app,
        "/games/bulk/",
        json!([
            game(1, 2, "2024-09-08", 24, 17),
            game(2, 1, "2024-09-15", 31, 28),
        ]),
    )
    .await;
    post(
        &app,
        "/player-stats/bulk/",
        json!([
            player_stat(1, 1, 2, 280, 10),
            player_stat(2, 1, 1, 0, 95),
            player_stat(3, 1, 1, 210, 5),
            player_stat(1, 2, 3, 320, 12),
            player_stat(3, 2, 3, 305, 40),
        ]),
    )
    .await;
    post(
        &app,
        "/team-stats/bulk/",
        json!([
            team_stat(1, 1, 390, 3, 6),
            team_stat(2, 1, 250, 2, 9),
            team_stat(1, 2, 410, 4, 4),
            team_stat(2, 2, 430, 4, 7),
        ]),
    )
    .await;

    app
}

#[tokio::test]
async fn query1_lists_players_on_a_team() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/Query1?team_id=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "player_id": 1, "first_name": "Sam", "last_name": "Reed", "position": "QB", "jersey_number": 12 },
            { "player_id": 2, "first_name": "Lee", "last_name": "Hart", "position": "QB", "jersey_number": 12 },
        ])
    );
}

#[tokio::test]
async fn query1_for_a_team_without_players_is_empty() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/Query1?team_id=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get(&app, "/Query1?team_id=999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn required_query_parameters_are_enforced() {
    let app = seeded_app().await;

    for uri in ["/Query1", "/Query8", "/Query14", "/Query1?team_id=abc", "/Query8?game_id=1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn query2_joins_teams_with_coaches() {
    let app = seeded_app().await;
    let (_, body) = get(&app, "/Query2").await;

    assert_eq!(
        body,
        json!([
            { "team_name": "Hawks", "first_name": "Ann", "last_name": "Cole", "role": "Head Coach" },
            { "team_name": "Owls", "first_name": "Bo", "last_name": "Pike", "role": "Offensive Coordinator" },
        ])
    );
}

#[tokio::test]
async fn query3_names_both_teams() {
    let app = seeded_app().await;
    let (_, body) = get(&app, "/Query3").await;

    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(
        body[1],
        json!({
            "game_id": 2,
            "game_date": "2024-09-15",
            "home_team": "Owls",
            "away_team": "Hawks",
            "home_team_score": 31,
            "away_team_score": 28
        })
    );
}

#[tokio::test]
async fn top_one_queries_pick_the_extremum() {
    let app = seeded_app().await;

    // Sam and Max both have 3; Sam's line was recorded first
    let (status, body) = get(&app, "/Query4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "first_name": "Sam", "last_name": "Reed", "touchdowns": 3 }));

    let (_, body) = get(&app, "/Query5").await;
    assert_eq!(body, json!({ "first_name": "Sam", "last_name": "Reed", "passing_yards": 320 }));

    let (_, body) = get(&app, "/Query7").await;
    assert_eq!(
        body,
        json!({
            "game_id": 2,
            "game_date": "2024-09-15",
            "home_team_score": 31,
            "away_team_score": 28,
            "total_points": 59
        })
    );

    let (_, body) = get(&app, "/Query10").await;
    assert_eq!(body, json!({ "team_name": "Owls", "total_yards": 430 }));

    let (_, body) = get(&app, "/Query13").await;
    assert_eq!(body, json!({ "first_name": "Lee", "last_name": "Hart", "rushing_yards": 95 }));
}

#[tokio::test]
async fn top_one_queries_on_empty_database_are_not_found() {
    let app = test_app().await;

    for uri in ["/Query4", "/Query5", "/Query7", "/Query10", "/Query13", "/Query14?game_id=1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["message"], "Resource not found", "{uri}");
    }
}

#[tokio::test]
async fn list_queries_on_empty_database_are_empty() {
    let app = test_app().await;

    for uri in ["/Query2", "/Query3", "/Query6", "/Query8?player_id=1", "/Query9", "/Query11", "/Query12", "/Query15"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn query6_sums_touchdowns_per_player() {
    let app = seeded_app().await;
    let (_, body) = get(&app, "/Query6").await;

    assert_eq!(
        body,
        json!([
            { "player_id": 1, "first_name": "Sam", "last_name": "Reed", "total_touchdowns": 5 },
            { "player_id": 2, "first_name": "Lee", "last_name": "Hart", "total_touchdowns": 1 },
            { "player_id": 3, "first_name": "Max", "last_name": "Dunn", "total_touchdowns": 4 },
        ])
    );
}

#[tokio::test]
async fn query8_lists_games_for_a_player() {
    let app = seeded_app().await;

    let (_, body) = get(&app, "/Query8?player_id=1").await;
    assert_eq!(
        body,
        json!([
            {
                "game_id": 1, "game_date": "2024-09-08", "home_team_score": 24, "away_team_score": 17,
                "touchdowns": 2, "passing_yards": 280, "rushing_yards": 10
            },
            {
                "game_id": 2, "game_date": "2024-09-15", "home_team_score": 31, "away_team_score": 28,
                "touchdowns": 3, "passing_yards": 320, "rushing_yards": 12
            },
        ])
    );

    let (_, body) = get(&app, "/Query8?player_id=4").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn query9_counts_players_and_keeps_empty_teams() {
    let app = test_app().await;
    post(&app, "/teams/", team("Hawks", "Metro")).await;
    post(&app, "/teams/", team("Owls", "Harbor")).await;
    post(&app, "/players/bulk/", json!([player("Sam", "Reed", Some(1)), player("Lee", "Hart", Some(1))])).await;

    let (status, body) = get(&app, "/Query9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "team_name": "Hawks", "total_players": 2 },
            { "team_name": "Owls", "total_players": 0 },
        ])
    );
}

#[tokio::test]
async fn team_aggregates() {
    let app = seeded_app().await;

    let (_, body) = get(&app, "/Query11").await;
    assert_eq!(
        body,
        json!([
            { "team_name": "Hawks", "avg_yards": 400.0 },
            { "team_name": "Owls", "avg_yards": 340.0 },
        ])
    );

    let (_, body) = get(&app, "/Query12").await;
    assert_eq!(
        body,
        json!([
            { "team_name": "Hawks", "total_penalties": 10 },
            { "team_name": "Owls", "total_penalties": 16 },
        ])
    );
}

#[tokio::test]
async fn query14_picks_the_top_scorer_in_a_game() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/Query14?game_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "first_name": "Sam", "last_name": "Reed", "touchdowns": 2, "passing_yards": 280, "rushing_yards": 10 })
    );

    let (status, _) = get(&app, "/Query14?game_id=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn query15_counts_games_and_wins() {
    let app = seeded_app().await;
    let (_, body) = get(&app, "/Query15").await;

    assert_eq!(
        body,
        json!([
            { "team_name": "Hawks", "games_played": 2, "wins": 1 },
            { "team_name": "Owls", "games_played": 2, "wins": 1 },
            { "team_name": "Bears", "games_played": 0, "wins": 0 },
        ])
    );
}
