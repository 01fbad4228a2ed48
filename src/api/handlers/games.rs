use axum::{extract::State, Json};

use crate::api::{error::ApiError, extract::ApiQuery, state::AppState};
use crate::domain::{GameRecord, GamesRequest};

/// GET /games?team_id=&team_name=&season=&limit=
pub async fn get_games(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<GamesRequest>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    let games = state.service.games(request).await?;
    Ok(Json(games))
}
