use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteExecutor, SqlitePool, SqlitePoolOptions};
use crate::models::*;

pub mod queries;

const SCHEMA: &str = include_str!("schema.sql");

/// Open the pool and make sure every table exists.
///
/// Foreign keys are switched on for each connection, so dangling
/// references fail at insert time.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

// Team queries
async fn insert_team_with<'e, E: SqliteExecutor<'e>>(executor: E, team: &TeamCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO teams (team_name, city, stadium, founded_year)
           VALUES (?, ?, ?, ?)"#
    )
    .bind(&team.team_name)
    .bind(&team.city)
    .bind(&team.stadium)
    .bind(team.founded_year)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_team(pool: &SqlitePool, team: &TeamCreate) -> Result<i64, sqlx::Error> {
    insert_team_with(pool, team).await
}

/// Insert every team in one transaction; ids come back in input order.
pub async fn insert_teams(pool: &SqlitePool, teams: &[TeamCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(teams.len());
    for team in teams {
        ids.push(insert_team_with(&mut *tx, team).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} teams", ids.len());
    Ok(ids)
}

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<TeamSummary>, sqlx::Error> {
    sqlx::query_as::<_, TeamSummary>(
        r#"SELECT team_name, city FROM teams"#
    )
    .fetch_all(pool)
    .await
}

// Player queries
async fn insert_player_with<'e, E: SqliteExecutor<'e>>(executor: E, player: &PlayerCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO players (first_name, last_name, position, jersey_number, team_id)
           VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(&player.first_name)
    .bind(&player.last_name)
    .bind(&player.position)
    .bind(player.jersey_number)
    .bind(player.team_id)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_player(pool: &SqlitePool, player: &PlayerCreate) -> Result<i64, sqlx::Error> {
    insert_player_with(pool, player).await
}

pub async fn insert_players(pool: &SqlitePool, players: &[PlayerCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(players.len());
    for player in players {
        ids.push(insert_player_with(&mut *tx, player).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} players", ids.len());
    Ok(ids)
}

pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<PlayerSummary>, sqlx::Error> {
    sqlx::query_as::<_, PlayerSummary>(
        r#"SELECT first_name, last_name, position FROM players"#
    )
    .fetch_all(pool)
    .await
}

// Coach queries
async fn insert_coach_with<'e, E: SqliteExecutor<'e>>(executor: E, coach: &CoachCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO coaches (first_name, last_name, role, team_id)
           VALUES (?, ?, ?, ?)"#
    )
    .bind(&coach.first_name)
    .bind(&coach.last_name)
    .bind(&coach.role)
    .bind(coach.team_id)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_coach(pool: &SqlitePool, coach: &CoachCreate) -> Result<i64, sqlx::Error> {
    insert_coach_with(pool, coach).await
}

pub async fn insert_coaches(pool: &SqlitePool, coaches: &[CoachCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(coaches.len());
    for coach in coaches {
        ids.push(insert_coach_with(&mut *tx, coach).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} coaches", ids.len());
    Ok(ids)
}

pub async fn get_all_coaches(pool: &SqlitePool) -> Result<Vec<CoachSummary>, sqlx::Error> {
    sqlx::query_as::<_, CoachSummary>(
        r#"SELECT first_name, last_name, role FROM coaches"#
    )
    .fetch_all(pool)
    .await
}

// Game queries
async fn insert_game_with<'e, E: SqliteExecutor<'e>>(executor: E, game: &GameCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO games (home_team_id, away_team_id, game_date, home_team_score, away_team_score)
           VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(game.home_team_id)
    .bind(game.away_team_id)
    .bind(game.game_date)
    .bind(game.home_team_score)
    .bind(game.away_team_score)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_game(pool: &SqlitePool, game: &GameCreate) -> Result<i64, sqlx::Error> {
    insert_game_with(pool, game).await
}

pub async fn insert_games(pool: &SqlitePool, games: &[GameCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(games.len());
    for game in games {
        ids.push(insert_game_with(&mut *tx, game).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} games", ids.len());
    Ok(ids)
}

pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<GameSummary>, sqlx::Error> {
    sqlx::query_as::<_, GameSummary>(
        r#"SELECT game_date, home_team_score, away_team_score FROM games"#
    )
    .fetch_all(pool)
    .await
}

// Player stat queries
async fn insert_player_stat_with<'e, E: SqliteExecutor<'e>>(executor: E, stat: &PlayerStatCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO player_stats (player_id, game_id, touchdowns, passing_yards, rushing_yards)
           VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(stat.player_id)
    .bind(stat.game_id)
    .bind(stat.touchdowns)
    .bind(stat.passing_yards)
    .bind(stat.rushing_yards)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_player_stat(pool: &SqlitePool, stat: &PlayerStatCreate) -> Result<i64, sqlx::Error> {
    insert_player_stat_with(pool, stat).await
}

pub async fn insert_player_stats(pool: &SqlitePool, stats: &[PlayerStatCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(stats.len());
    for stat in stats {
        ids.push(insert_player_stat_with(&mut *tx, stat).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} player stat lines", ids.len());
    Ok(ids)
}

pub async fn get_all_player_stats(pool: &SqlitePool) -> Result<Vec<PlayerStatSummary>, sqlx::Error> {
    sqlx::query_as::<_, PlayerStatSummary>(
        r#"SELECT player_id, game_id, touchdowns, passing_yards, rushing_yards FROM player_stats"#
    )
    .fetch_all(pool)
    .await
}

// Team stat queries
async fn insert_team_stat_with<'e, E: SqliteExecutor<'e>>(executor: E, stat: &TeamStatCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO team_stats (team_id, game_id, total_yards, total_touchdowns, penalties)
           VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(stat.team_id)
    .bind(stat.game_id)
    .bind(stat.total_yards)
    .bind(stat.total_touchdowns)
    .bind(stat.penalties)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_team_stat(pool: &SqlitePool, stat: &TeamStatCreate) -> Result<i64, sqlx::Error> {
    insert_team_stat_with(pool, stat).await
}

pub async fn insert_team_stats(pool: &SqlitePool, stats: &[TeamStatCreate]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(stats.len());
    for stat in stats {
        ids.push(insert_team_stat_with(&mut *tx, stat).await?);
    }
    tx.commit().await?;

    tracing::debug!("Inserted {} team stat lines", ids.len());
    Ok(ids)
}

pub async fn get_all_team_stats(pool: &SqlitePool) -> Result<Vec<TeamStatSummary>, sqlx::Error> {
    sqlx::query_as::<_, TeamStatSummary>(
        r#"SELECT team_id, game_id, total_yards, total_touchdowns, penalties FROM team_stats"#
    )
    .fetch_all(pool)
    .await
}
