use axum::{extract::State, Json};

use crate::api::{error::ApiError, extract::ApiQuery, state::AppState, types::AggregateResponse};
use crate::domain::{
    GameLogRecord, GameLogRequest, PlayerAggRequest, PlayerSearchHit, PlayerSearchRequest,
};

/// GET /players/agg?person_id=&season=&last_n=
pub async fn get_player_aggregate(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<PlayerAggRequest>,
) -> Result<Json<AggregateResponse>, ApiError> {
    let aggregate = state.service.player_aggregate(request).await?;
    Ok(Json(aggregate.into()))
}

/// GET /players/gamelogs?person_id=&season=&opponent=&home=&game_type=&limit=&offset=
pub async fn get_player_game_logs(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<GameLogRequest>,
) -> Result<Json<Vec<GameLogRecord>>, ApiError> {
    let logs = state.service.player_game_logs(request).await?;
    Ok(Json(logs))
}

/// GET /players/search?q=&limit=
pub async fn search_players(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<PlayerSearchRequest>,
) -> Result<Json<Vec<PlayerSearchHit>>, ApiError> {
    let hits = state.service.search_players(request).await?;
    Ok(Json(hits))
}
