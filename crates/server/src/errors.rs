use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Handler error rendered as a status code with a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl ApiError {
    /// Map a service failure. Caller mistakes keep their own message; server
    /// failures are logged and answered with `context`.
    pub fn service(e: ServiceError, context: &str) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::UploadRejected(msg) => ApiError::BadRequest(msg),
            ServiceError::Model(m) => ApiError::BadRequest(m.to_string()),
            other @ (ServiceError::Persist { .. } | ServiceError::CorruptState { .. }) => {
                error!(error = %other, "{}", context);
                ApiError::Internal(context.to_string())
            }
        }
    }

    pub fn auth(e: AuthError, context: &str) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(format!("Error: {e}"))
        } else {
            error!(error = %e, code = e.code(), "{}", context);
            ApiError::Internal(format!("Error: {context}"))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
            ApiError::Multipart(e) => e.into_response(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(#[from] ServiceError),
}
