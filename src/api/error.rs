use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::api::types::ErrorBody;
use crate::error::StatsError;

/// Failure of a single API request
#[derive(Debug)]
pub enum ApiError {
    /// Service-level failure (validation or database)
    Service(StatsError),
    /// Query string could not be deserialized into the endpoint's parameters
    MalformedQuery(QueryRejection),
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        ApiError::Service(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedQuery(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Validation failures are a structured payload, not an HTTP error
            ApiError::Service(StatsError::InvalidRequest(message)) => (StatusCode::OK, message),
            ApiError::MalformedQuery(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            ApiError::Service(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
