use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::CoreError;
use serde_json::json;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors.
/// Implements [`IntoResponse`] so handlers can return it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound {
            entity,
            id: id.into(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    axum::Json(MessageResponse::new(format!("{entity} not found"))),
                )
                    .into_response()
            }
            AppError::Core(CoreError::Validation(issues)) => {
                tracing::debug!(issue_count = issues.len(), "Payload failed validation");
                (
                    StatusCode::BAD_REQUEST,
                    axum::Json(json!({ "error": issues })),
                )
                    .into_response()
            }
            AppError::Core(CoreError::Seed(err)) => {
                tracing::error!(error = %err, "Seed dataset error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(MessageResponse::new("An internal error occurred")),
                )
                    .into_response()
            }
        }
    }
}
