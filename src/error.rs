use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorBody;

// Everything a request can fail with. Clients only ever see the three
// fixed bodies below; the underlying cause goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no \"file\" field in the uploaded form")]
    MissingFile,

    #[error("unreadable multipart payload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("AI service request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFile => (StatusCode::BAD_REQUEST, "File not found"),
            ApiError::Multipart(_) => (StatusCode::BAD_REQUEST, "Invalid form data"),
            ApiError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
