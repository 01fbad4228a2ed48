use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info, instrument};

use crate::config::DatabaseConfig;
use crate::domain::{
    AggregateCriteria, GameLogCriteria, GameLogRecord, GameRecord, GamesCriteria,
    PlayerAggregate, PlayerSearchCriteria, PlayerSearchHit, StatsRepository,
};
use crate::error::Result;
use crate::query::{
    game_logs_statement, games_statement, player_aggregate_statement, player_search_statement,
};

/// PostgreSQL storage adapter
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = Self::pool_options(config).connect(&config.url).await?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a store whose connections are opened on first use
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let pool = Self::pool_options(config).connect_lazy(&config.url)?;
        Ok(Self { pool })
    }

    /// Create a PostgreSQL store from an existing connection pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection; waits for borrowed ones to come back
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

#[async_trait]
impl StatsRepository for PostgresStore {
    #[instrument(skip(self))]
    async fn games(&self, criteria: &GamesCriteria) -> Result<Vec<GameRecord>> {
        let rows = games_statement(criteria)
            .build_query_as::<GameRecord>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "games query complete");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn player_aggregate(
        &self,
        criteria: &AggregateCriteria,
    ) -> Result<Option<PlayerAggregate>> {
        let row = player_aggregate_statement(criteria)
            .build_query_as::<PlayerAggregate>()
            .fetch_optional(&self.pool)
            .await?;

        debug!(found = row.is_some(), "player aggregate query complete");
        Ok(row)
    }

    #[instrument(skip(self))]
    async fn player_game_logs(&self, criteria: &GameLogCriteria) -> Result<Vec<GameLogRecord>> {
        let rows = game_logs_statement(criteria)
            .build_query_as::<GameLogRecord>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "game log query complete");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn search_players(
        &self,
        criteria: &PlayerSearchCriteria,
    ) -> Result<Vec<PlayerSearchHit>> {
        let rows = player_search_statement(criteria)
            .build_query_as::<PlayerSearchHit>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "player search complete");
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
