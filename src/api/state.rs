use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::domain::StatsRepository;
use crate::services::QueryService;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Query service over the pooled repository
    pub service: QueryService,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(repo: Arc<dyn StatsRepository>, api: &ApiConfig) -> Self {
        Self {
            service: QueryService::new(repo, api.max_page_size),
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
