use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod queries;

pub use queries::*;

// Teams

/// Payload for creating a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCreate {
    pub team_name: String,
    pub city: String,
    pub stadium: String,
    pub founded_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub city: String,
    pub stadium: String,
    pub founded_year: i32,
}

impl TeamCreate {
    pub fn with_id(self, team_id: i64) -> Team {
        Team {
            team_id,
            team_name: self.team_name,
            city: self.city,
            stadium: self.stadium,
            founded_year: self.founded_year,
        }
    }
}

/// Team row as listed by `GET /teams/`
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamSummary {
    pub team_name: String,
    pub city: String,
}

// Players

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: i32,
    /// Unassigned players have no team
    #[serde(default)]
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: i32,
    pub team_id: Option<i64>,
}

impl PlayerCreate {
    pub fn with_id(self, player_id: i64) -> Player {
        Player {
            player_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            jersey_number: self.jersey_number,
            team_id: self.team_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerSummary {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

// Coaches

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachCreate {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub coach_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub team_id: Option<i64>,
}

impl CoachCreate {
    pub fn with_id(self, coach_id: i64) -> Coach {
        Coach {
            coach_id,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            team_id: self.team_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct CoachSummary {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

// Games

/// Payload for creating a game; `game_date` is `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameCreate {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

impl GameCreate {
    pub fn with_id(self, game_id: i64) -> Game {
        Game {
            game_id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            game_date: self.game_date,
            home_team_score: self.home_team_score,
            away_team_score: self.away_team_score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameSummary {
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

// Player stats

/// One player's line for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatCreate {
    pub player_id: i64,
    pub game_id: i64,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub stat_id: i64,
    pub player_id: i64,
    pub game_id: i64,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

impl PlayerStatCreate {
    pub fn with_id(self, stat_id: i64) -> PlayerStat {
        PlayerStat {
            stat_id,
            player_id: self.player_id,
            game_id: self.game_id,
            touchdowns: self.touchdowns,
            passing_yards: self.passing_yards,
            rushing_yards: self.rushing_yards,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerStatSummary {
    pub player_id: i64,
    pub game_id: i64,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

// Team stats

/// One team's totals for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatCreate {
    pub team_id: i64,
    pub game_id: i64,
    pub total_yards: i32,
    pub total_touchdowns: i32,
    pub penalties: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub team_stat_id: i64,
    pub team_id: i64,
    pub game_id: i64,
    pub total_yards: i32,
    pub total_touchdowns: i32,
    pub penalties: i32,
}

impl TeamStatCreate {
    pub fn with_id(self, team_stat_id: i64) -> TeamStat {
        TeamStat {
            team_stat_id,
            team_id: self.team_id,
            game_id: self.game_id,
            total_yards: self.total_yards,
            total_touchdowns: self.total_touchdowns,
            penalties: self.penalties,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamStatSummary {
    pub team_id: i64,
    pub game_id: i64,
    pub total_yards: i32,
    pub total_touchdowns: i32,
    pub penalties: i32,
}
