//! Row shapes returned by the fixed analytical queries. Field names match
//! the SQL column names and aliases in `db::queries`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query1: a player on the requested team
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRosterPlayer {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: i32,
}

/// Query2
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamCoach {
    pub team_name: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Query3: a game with both team names resolved
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameMatchup {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

/// Query4
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TouchdownLeader {
    pub first_name: String,
    pub last_name: String,
    pub touchdowns: i32,
}

/// Query5
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct PassingLeader {
    pub first_name: String,
    pub last_name: String,
    pub passing_yards: i32,
}

/// Query6
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerTouchdownTotal {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub total_touchdowns: i64,
}

/// Query7
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct HighestScoringGame {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub total_points: i64,
}

/// Query8: one game the player appeared in, with the player's line
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerGameLine {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

/// Query9
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamPlayerCount {
    pub team_name: String,
    pub total_players: i64,
}

/// Query10
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamYardsLeader {
    pub team_name: String,
    pub total_yards: i32,
}

/// Query11
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamAverageYards {
    pub team_name: String,
    pub avg_yards: f64,
}

/// Query12
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamPenaltyTotal {
    pub team_name: String,
    pub total_penalties: i64,
}

/// Query13
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct RushingLeader {
    pub first_name: String,
    pub last_name: String,
    pub rushing_yards: i32,
}

/// Query14: best touchdown line within one game
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameTopPerformer {
    pub first_name: String,
    pub last_name: String,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

/// Query15
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRecord {
    pub team_name: String,
    pub games_played: i64,
    pub wins: i64,
}
