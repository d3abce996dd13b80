//! The fifteen fixed analytical queries.
//!
//! Top-1 queries order by the ranked column and then by the lowest id of the
//! ranked table, so ties always resolve to the earliest-inserted row.

use sqlx::sqlite::SqlitePool;
use crate::models::*;

/// Query1: players assigned to a team
pub async fn get_team_roster(pool: &SqlitePool, team_id: i64) -> Result<Vec<TeamRosterPlayer>, sqlx::Error> {
    sqlx::query_as::<_, TeamRosterPlayer>(
        r#"SELECT player_id, first_name, last_name, position, jersey_number
           FROM players
           WHERE team_id = ?
           ORDER BY player_id"#
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

/// Query2: every coach alongside the team they belong to
pub async fn get_team_coaches(pool: &SqlitePool) -> Result<Vec<TeamCoach>, sqlx::Error> {
    sqlx::query_as::<_, TeamCoach>(
        r#"SELECT t.team_name, c.first_name, c.last_name, c.role
           FROM teams t
           JOIN coaches c ON c.team_id = t.team_id
           ORDER BY t.team_id, c.coach_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query3: games with home and away team names
pub async fn get_game_matchups(pool: &SqlitePool) -> Result<Vec<GameMatchup>, sqlx::Error> {
    sqlx::query_as::<_, GameMatchup>(
        r#"SELECT
               g.game_id,
               g.game_date,
               home.team_name AS home_team,
               away.team_name AS away_team,
               g.home_team_score,
               g.away_team_score
           FROM games g
           JOIN teams home ON home.team_id = g.home_team_id
           JOIN teams away ON away.team_id = g.away_team_id
           ORDER BY g.game_date, g.game_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query4: most touchdowns in a single game
pub async fn get_touchdown_leader(pool: &SqlitePool) -> Result<Option<TouchdownLeader>, sqlx::Error> {
    sqlx::query_as::<_, TouchdownLeader>(
        r#"SELECT p.first_name, p.last_name, ps.touchdowns
           FROM player_stats ps
           JOIN players p ON p.player_id = ps.player_id
           ORDER BY ps.touchdowns DESC, ps.stat_id ASC
           LIMIT 1"#
    )
    .fetch_optional(pool)
    .await
}

/// Query5: most passing yards in a single game
pub async fn get_passing_leader(pool: &SqlitePool) -> Result<Option<PassingLeader>, sqlx::Error> {
    sqlx::query_as::<_, PassingLeader>(
        r#"SELECT p.first_name, p.last_name, ps.passing_yards
           FROM player_stats ps
           JOIN players p ON p.player_id = ps.player_id
           ORDER BY ps.passing_yards DESC, ps.stat_id ASC
           LIMIT 1"#
    )
    .fetch_optional(pool)
    .await
}

/// Query6: career touchdowns for every player with at least one stat line
pub async fn get_touchdown_totals(pool: &SqlitePool) -> Result<Vec<PlayerTouchdownTotal>, sqlx::Error> {
    sqlx::query_as::<_, PlayerTouchdownTotal>(
        r#"SELECT p.player_id, p.first_name, p.last_name, SUM(ps.touchdowns) AS total_touchdowns
           FROM players p
           JOIN player_stats ps ON ps.player_id = p.player_id
           GROUP BY p.player_id, p.first_name, p.last_name
           ORDER BY p.player_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query7: game with the highest combined score
pub async fn get_highest_scoring_game(pool: &SqlitePool) -> Result<Option<HighestScoringGame>, sqlx::Error> {
    sqlx::query_as::<_, HighestScoringGame>(
        r#"SELECT
               game_id,
               game_date,
               home_team_score,
               away_team_score,
               home_team_score + away_team_score AS total_points
           FROM games
           ORDER BY total_points DESC, game_id ASC
           LIMIT 1"#
    )
    .fetch_optional(pool)
    .await
}

/// Query8: games a player has a stat line in
pub async fn get_player_games(pool: &SqlitePool, player_id: i64) -> Result<Vec<PlayerGameLine>, sqlx::Error> {
    sqlx::query_as::<_, PlayerGameLine>(
        r#"SELECT
               g.game_id,
               g.game_date,
               g.home_team_score,
               g.away_team_score,
               ps.touchdowns,
               ps.passing_yards,
               ps.rushing_yards
           FROM player_stats ps
           JOIN games g ON g.game_id = ps.game_id
           WHERE ps.player_id = ?
           ORDER BY g.game_date, g.game_id"#
    )
    .bind(player_id)
    .fetch_all(pool)
    .await
}

/// Query9: roster size per team; teams without players count zero
pub async fn get_player_counts(pool: &SqlitePool) -> Result<Vec<TeamPlayerCount>, sqlx::Error> {
    sqlx::query_as::<_, TeamPlayerCount>(
        r#"SELECT t.team_name, COUNT(p.player_id) AS total_players
           FROM teams t
           LEFT JOIN players p ON p.team_id = t.team_id
           GROUP BY t.team_id, t.team_name
           ORDER BY t.team_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query10: most total yards by a team in a single game
pub async fn get_team_yards_leader(pool: &SqlitePool) -> Result<Option<TeamYardsLeader>, sqlx::Error> {
    sqlx::query_as::<_, TeamYardsLeader>(
        r#"SELECT t.team_name, ts.total_yards
           FROM team_stats ts
           JOIN teams t ON t.team_id = ts.team_id
           ORDER BY ts.total_yards DESC, ts.team_stat_id ASC
           LIMIT 1"#
    )
    .fetch_optional(pool)
    .await
}

/// Query11
pub async fn get_team_average_yards(pool: &SqlitePool) -> Result<Vec<TeamAverageYards>, sqlx::Error> {
    sqlx::query_as::<_, TeamAverageYards>(
        r#"SELECT t.team_name, AVG(ts.total_yards) AS avg_yards
           FROM teams t
           JOIN team_stats ts ON ts.team_id = t.team_id
           GROUP BY t.team_id, t.team_name
           ORDER BY t.team_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query12
pub async fn get_team_penalty_totals(pool: &SqlitePool) -> Result<Vec<TeamPenaltyTotal>, sqlx::Error> {
    sqlx::query_as::<_, TeamPenaltyTotal>(
        r#"SELECT t.team_name, SUM(ts.penalties) AS total_penalties
           FROM teams t
           JOIN team_stats ts ON ts.team_id = t.team_id
           GROUP BY t.team_id, t.team_name
           ORDER BY t.team_id"#
    )
    .fetch_all(pool)
    .await
}

/// Query13: most rushing yards in a single game
pub async fn get_rushing_leader(pool: &SqlitePool) -> Result<Option<RushingLeader>, sqlx::Error> {
    sqlx::query_as::<_, RushingLeader>(
        r#"SELECT p.first_name, p.last_name, ps.rushing_yards
           FROM player_stats ps
           JOIN players p ON p.player_id = ps.player_id
           ORDER BY ps.rushing_yards DESC, ps.stat_id ASC
           LIMIT 1"#
    )
    .fetch_optional(pool)
    .await
}

/// Query14: player with the most touchdowns in one game
pub async fn get_game_top_performer(pool: &SqlitePool, game_id: i64) -> Result<Option<GameTopPerformer>, sqlx::Error> {
    sqlx::query_as::<_, GameTopPerformer>(
        r#"SELECT p.first_name, p.last_name, ps.touchdowns, ps.passing_yards, ps.rushing_yards
           FROM player_stats ps
           JOIN players p ON p.player_id = ps.player_id
           WHERE ps.game_id = ?
           ORDER BY ps.touchdowns DESC, ps.stat_id ASC
           LIMIT 1"#
    )
    .bind(game_id)
    .fetch_optional(pool)
    .await
}

/// Query15: games played and wins per team. Ties count for neither side.
pub async fn get_team_records(pool: &SqlitePool) -> Result<Vec<TeamRecord>, sqlx::Error> {
    sqlx::query_as::<_, TeamRecord>(
        r#"SELECT
               t.team_name,
               COUNT(g.game_id) AS games_played,
               COALESCE(SUM(
                   CASE
                       WHEN g.home_team_id = t.team_id AND g.home_team_score > g.away_team_score THEN 1
                       WHEN g.away_team_id = t.team_id AND g.away_team_score > g.home_team_score THEN 1
                       ELSE 0
                   END
               ), 0) AS wins
           FROM teams t
           LEFT JOIN games g ON g.home_team_id = t.team_id OR g.away_team_id = t.team_id
           GROUP BY t.team_id, t.team_name
           ORDER BY t.team_id"#
    )
    .fetch_all(pool)
    .await
}
