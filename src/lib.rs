pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod services;

pub use adapters::PostgresStore;
pub use config::AppConfig;
pub use domain::{
    GameLogRecord, GameRecord, PlayerAggregate, PlayerSearchHit, Season, SeasonWindow,
    StatsRepository,
};
pub use error::{Result, StatsError};
pub use services::QueryService;
