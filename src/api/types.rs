use serde::{Deserialize, Serialize};

use crate::domain::PlayerAggregate;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `/players/agg` body: the aggregate, or `{}` when nothing matched
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AggregateResponse {
    Found(PlayerAggregate),
    Empty {},
}

impl From<Option<PlayerAggregate>> for AggregateResponse {
    fn from(aggregate: Option<PlayerAggregate>) -> Self {
        match aggregate {
            Some(aggregate) => AggregateResponse::Found(aggregate),
            None => AggregateResponse::Empty {},
        }
    }
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub db: String,
    pub uptime_secs: i64,
}
