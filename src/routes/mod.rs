pub mod coaches;
pub mod games;
pub mod health;
pub mod player_stats;
pub mod players;
pub mod queries;
pub mod team_stats;
pub mod teams;
