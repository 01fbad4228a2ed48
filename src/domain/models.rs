use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Game Records
// ============================================================================

/// One row of `/games`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameRecord {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub game_type: Option<String>,
    pub home_team_id: Option<i64>,
    pub home_team_name: Option<String>,
    pub home_score: Option<i32>,
    pub away_team_id: Option<i64>,
    pub away_team_name: Option<String>,
    pub away_score: Option<i32>,
}

// ============================================================================
// Player Records
// ============================================================================

/// Recent-form versus full-window averages for one player.
///
/// `last_n_*` fields average the most recent `last_n` games inside the filtered
/// window; `season_*` fields average every game in that same window. Both come
/// from one ranked row set, so a filter change moves them together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerAggregate {
    pub person_id: i64,
    pub player_name: Option<String>,
    pub games_played: i64,
    pub last_n_games: i64,
    pub last_n_pts: Option<f64>,
    pub last_n_reb: Option<f64>,
    pub last_n_ast: Option<f64>,
    pub last_n_pra: Option<f64>,
    pub season_pts: Option<f64>,
    pub season_reb: Option<f64>,
    pub season_ast: Option<f64>,
    pub season_pra: Option<f64>,
}

/// One row of `/players/gamelogs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameLogRecord {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub team: Option<String>,
    pub opp: Option<String>,
    pub is_home: Option<bool>,
    pub game_type: Option<String>,
    pub points: Option<i32>,
    pub assists: Option<i32>,
    pub rebounds: Option<i32>,
    /// points + assists + rebounds, derived at query time
    pub pra: Option<i32>,
    pub tpm: Option<i32>,
    pub fga: Option<i32>,
    pub fgm: Option<i32>,
    pub fta: Option<i32>,
    pub ftm: Option<i32>,
    pub plus_minus: Option<i32>,
    pub minutes: Option<f64>,
}

/// One row of `/players/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerSearchHit {
    pub person_id: i64,
    pub player_name: String,
}
