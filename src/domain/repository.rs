//! Read-side storage seam for the query service

use async_trait::async_trait;

use super::models::{GameLogRecord, GameRecord, PlayerAggregate, PlayerSearchHit};
use super::requests::{AggregateCriteria, GameLogCriteria, GamesCriteria, PlayerSearchCriteria};
use crate::error::Result;

/// Read-only access to games, players and player statistics.
///
/// Each call runs exactly one statement on a connection borrowed for the
/// duration of the call. Empty matches are `Ok` with no rows, never errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Games involving a team, newest first
    async fn games(&self, criteria: &GamesCriteria) -> Result<Vec<GameRecord>>;

    /// Last-N and full-window averages; `None` when the player has no matching games
    async fn player_aggregate(&self, criteria: &AggregateCriteria)
        -> Result<Option<PlayerAggregate>>;

    /// Per-game box score lines, newest first
    async fn player_game_logs(&self, criteria: &GameLogCriteria) -> Result<Vec<GameLogRecord>>;

    /// Players whose full name contains the search text, alphabetically
    async fn search_players(&self, criteria: &PlayerSearchCriteria)
        -> Result<Vec<PlayerSearchHit>>;

    /// Cheap connectivity probe
    async fn ping(&self) -> Result<()>;
}
