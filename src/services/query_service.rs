//! The query service: validated request in, typed records out.

use std::sync::Arc;
use tracing::debug;

use crate::domain::{
    GameLogRecord, GameLogRequest, GameRecord, GamesRequest, PlayerAggRequest, PlayerAggregate,
    PlayerSearchHit, PlayerSearchRequest, StatsRepository,
};
use crate::error::Result;

/// Validates requests and runs them against a [`StatsRepository`].
///
/// Validation always happens first, so an invalid request never touches the
/// database. Repository errors are passed through untouched.
#[derive(Clone)]
pub struct QueryService {
    repo: Arc<dyn StatsRepository>,
    max_page_size: i64,
}

impl QueryService {
    pub fn new(repo: Arc<dyn StatsRepository>, max_page_size: i64) -> Self {
        Self {
            repo,
            max_page_size,
        }
    }

    pub fn repository(&self) -> &Arc<dyn StatsRepository> {
        &self.repo
    }

    pub async fn games(&self, request: GamesRequest) -> Result<Vec<GameRecord>> {
        let criteria = request.validate(self.max_page_size)?;
        debug!(?criteria, "games");
        self.repo.games(&criteria).await
    }

    pub async fn player_aggregate(
        &self,
        request: PlayerAggRequest,
    ) -> Result<Option<PlayerAggregate>> {
        let criteria = request.validate()?;
        debug!(?criteria, "player aggregate");
        self.repo.player_aggregate(&criteria).await
    }

    pub async fn player_game_logs(&self, request: GameLogRequest) -> Result<Vec<GameLogRecord>> {
        let criteria = request.validate(self.max_page_size)?;
        debug!(?criteria, "player game logs");
        self.repo.player_game_logs(&criteria).await
    }

    pub async fn search_players(
        &self,
        request: PlayerSearchRequest,
    ) -> Result<Vec<PlayerSearchHit>> {
        let criteria = request.validate(self.max_page_size)?;
        debug!(?criteria, "player search");
        self.repo.search_players(&criteria).await
    }
}
