//! SQL construction: typed filter sets and the statements built from them.

pub mod filter;
pub mod statements;

pub use filter::{FilterSet, Predicate, SqlParam};
pub use statements::{
    game_logs_statement, games_statement, like_substring_pattern, player_aggregate_statement,
    player_search_statement,
};
