use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::api::{state::AppState, types::*};

/// GET / -- liveness message
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "NBA Stats API is running".to_string(),
    })
}

/// GET /health -- lightweight liveness/readiness probe
pub async fn health_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_status = match state.service.repository().ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            warn!(error = %e, "database health check failed");
            "disconnected".to_string()
        }
    };

    let ok = db_status == "connected";
    let resp = HealthResponse {
        status: if ok {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        db: db_status,
        uptime_secs: state.uptime_seconds(),
    };

    if ok {
        Ok(Json(resp))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(resp)))
    }
}
