use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ironlog_domain::QueryError;

/// Failure modes of the catalog API. Internal detail of upstream failures
/// is logged, never returned to the caller.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error("Exercise not found")]
    NotFound,
    #[error("catalog temporarily unavailable")]
    Upstream,
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        tracing::error!("catalog query failed: {err}");
        ApiError::Upstream
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
