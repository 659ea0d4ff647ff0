use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::feed::FeedError;
use crate::session::MarkerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Session marker error: {0}")]
    Marker(#[from] MarkerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Feed unavailable".to_string(),
                )
            }
            AppError::Marker(e) => {
                tracing::error!("Session marker error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
