use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jotfile_core::Error;
use tracing::error;

/// Maps core errors onto plain-text HTTP responses
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
            Error::InvalidInput(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            err => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
