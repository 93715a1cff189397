use axum::{
    response::{IntoResponse, Response},
    http::{header, StatusCode},
};
use crate::errors::AppError;

/// 302 back to the index; the one answer for every denied or skipped action.
pub fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authorization failures and unreachable upstreams look the same to the caller
            AppError::Unauthorized | AppError::Upstream(_) => redirect_to_index(),

            AppError::UsernameTaken => (
                StatusCode::CONFLICT,
                "Username already exists!".to_string()
            ).into_response(),

            AppError::File(e) if e.kind() == std::io::ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                "File not found".to_string()
            ).into_response(),

            err => {
                tracing::error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal error: {}", err)
                ).into_response()
            }
        }
    }
}
