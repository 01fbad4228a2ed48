//! Raw request parameters and their validated criteria.
//!
//! Requests mirror the HTTP query strings: every filter is optional and
//! defaults are applied during validation. Criteria are what the repository
//! accepts; building one is the only way past the validation rules.

use serde::{Deserialize, Deserializer};

use super::season::Season;
use crate::error::{Result, StatsError};

pub const DEFAULT_GAMES_LIMIT: i64 = 200;
pub const DEFAULT_LAST_N: i64 = 10;
pub const DEFAULT_GAME_LOG_LIMIT: i64 = 50;
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesRequest {
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub season: Option<i32>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerAggRequest {
    pub person_id: i64,
    pub season: Option<i32>,
    pub last_n: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameLogRequest {
    pub person_id: i64,
    pub season: Option<i32>,
    pub opponent: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub home: Option<bool>,
    pub game_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSearchRequest {
    pub q: String,
    pub limit: Option<i64>,
}

// ============================================================================
// Criteria
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GamesCriteria {
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub season: Option<Season>,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCriteria {
    pub person_id: i64,
    pub season: Option<Season>,
    pub last_n: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameLogCriteria {
    pub person_id: i64,
    pub season: Option<Season>,
    pub opponent: Option<String>,
    pub home: Option<bool>,
    pub game_type: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSearchCriteria {
    /// Search text as supplied; LIKE escaping happens when the statement is built
    pub text: String,
    pub limit: i64,
}

impl GamesRequest {
    pub fn validate(self, max_page_size: i64) -> Result<GamesCriteria> {
        // Zero ids and empty names count as "not supplied"
        let team_id = self.team_id.filter(|id| *id != 0);
        let team_name = non_empty(self.team_name);
        if team_id.is_none() && team_name.is_none() {
            return Err(StatsError::invalid("Provide team_id or team_name"));
        }

        Ok(GamesCriteria {
            team_id,
            team_name,
            season: self.season.map(Season::new).transpose()?,
            limit: page_limit(self.limit, DEFAULT_GAMES_LIMIT, max_page_size)?,
        })
    }
}

impl PlayerAggRequest {
    pub fn validate(self) -> Result<AggregateCriteria> {
        let last_n = self.last_n.unwrap_or(DEFAULT_LAST_N);
        if last_n < 1 {
            return Err(StatsError::invalid("last_n must be at least 1"));
        }

        Ok(AggregateCriteria {
            person_id: self.person_id,
            season: self.season.map(Season::new).transpose()?,
            last_n,
        })
    }
}

impl GameLogRequest {
    pub fn validate(self, max_page_size: i64) -> Result<GameLogCriteria> {
        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(StatsError::invalid("offset must not be negative"));
        }

        Ok(GameLogCriteria {
            person_id: self.person_id,
            season: self.season.map(Season::new).transpose()?,
            opponent: non_empty(self.opponent),
            home: self.home,
            game_type: non_empty(self.game_type),
            limit: page_limit(self.limit, DEFAULT_GAME_LOG_LIMIT, max_page_size)?,
            offset,
        })
    }
}

impl PlayerSearchRequest {
    /// The text is matched as typed; an empty `q` matches every player
    pub fn validate(self, max_page_size: i64) -> Result<PlayerSearchCriteria> {
        Ok(PlayerSearchCriteria {
            text: self.q,
            limit: page_limit(self.limit, DEFAULT_SEARCH_LIMIT, max_page_size)?,
        })
    }
}

/// Query-string boolean: `1/0`, `yes/no`, `on/off`, `t/f`, `y/n` and
/// `true/false` in any case. An empty value counts as absent.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_flag(&raw).map_err(serde::de::Error::custom)
}

fn parse_flag(raw: &str) -> std::result::Result<Option<bool>, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(Some(true)),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(Some(false)),
        other => Err(format!("invalid boolean value `{other}`")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn page_limit(limit: Option<i64>, default: i64, max_page_size: i64) -> Result<i64> {
    let limit = limit.unwrap_or(default);
    if limit < 0 {
        return Err(StatsError::invalid("limit must not be negative"));
    }
    Ok(limit.min(max_page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: i64 = 1000;

    #[test]
    fn test_games_requires_a_team() {
        let err = GamesRequest::default().validate(MAX).unwrap_err();
        assert_eq!(err.to_string(), "Provide team_id or team_name");

        let req = GamesRequest {
            team_id: Some(0),
            team_name: Some(String::new()),
            season: Some(2024),
            limit: None,
        };
        assert!(req.validate(MAX).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_games_defaults() {
        let criteria = GamesRequest {
            team_id: Some(1610612743),
            ..Default::default()
        }
        .validate(MAX)
        .unwrap();

        assert_eq!(criteria.limit, DEFAULT_GAMES_LIMIT);
        assert_eq!(criteria.team_name, None);
        assert_eq!(criteria.season, None);
    }

    #[test]
    fn test_limit_is_clamped_and_negative_rejected() {
        let req = GamesRequest {
            team_name: Some("Nuggets".into()),
            limit: Some(50_000),
            ..Default::default()
        };
        assert_eq!(req.validate(MAX).unwrap().limit, MAX);

        let req = GamesRequest {
            team_name: Some("Nuggets".into()),
            limit: Some(-1),
            ..Default::default()
        };
        assert!(req.validate(MAX).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_aggregate_last_n() {
        let criteria = PlayerAggRequest {
            person_id: 203999,
            season: None,
            last_n: None,
        }
        .validate()
        .unwrap();
        assert_eq!(criteria.last_n, DEFAULT_LAST_N);

        let err = PlayerAggRequest {
            person_id: 203999,
            season: None,
            last_n: Some(0),
        }
        .validate()
        .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_game_log_blank_filters_are_dropped() {
        let criteria = GameLogRequest {
            person_id: 203999,
            season: Some(2024),
            opponent: Some(String::new()),
            home: Some(false),
            game_type: Some(String::new()),
            limit: None,
            offset: None,
        }
        .validate(MAX)
        .unwrap();

        assert_eq!(criteria.opponent, None);
        assert_eq!(criteria.game_type, None);
        assert_eq!(criteria.home, Some(false));
        assert_eq!(criteria.season.map(|s| s.start_year()), Some(2024));
        assert_eq!((criteria.limit, criteria.offset), (DEFAULT_GAME_LOG_LIMIT, 0));
    }

    #[test]
    fn test_game_log_negative_offset() {
        let err = GameLogRequest {
            person_id: 1,
            season: None,
            opponent: None,
            home: None,
            game_type: None,
            limit: None,
            offset: Some(-50),
        }
        .validate(MAX)
        .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_search_keeps_text_as_typed() {
        let criteria = PlayerSearchRequest {
            q: "Stephen ".into(),
            limit: None,
        }
        .validate(MAX)
        .unwrap();
        assert_eq!(criteria.text, "Stephen ");
        assert_eq!(criteria.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_empty_search_is_allowed() {
        let criteria = PlayerSearchRequest {
            q: String::new(),
            limit: Some(5),
        }
        .validate(MAX)
        .unwrap();
        assert_eq!(criteria.text, "");
        assert_eq!(criteria.limit, 5);
    }

    #[test]
    fn test_flag_spellings() {
        for raw in ["1", "true", "TRUE", "t", "yes", "Y", "on"] {
            assert_eq!(parse_flag(raw), Ok(Some(true)), "{raw}");
        }
        for raw in ["0", "false", "F", "no", "n", "Off"] {
            assert_eq!(parse_flag(raw), Ok(Some(false)), "{raw}");
        }
        assert_eq!(parse_flag(""), Ok(None));
        assert!(parse_flag("maybe").is_err());
    }
}
