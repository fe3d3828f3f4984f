use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("upstream rejected the update: {0}")]
    UpstreamRejected(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::UpstreamRejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the storefront. Internal detail stays in the
    /// server log.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Validation(message) => message.clone(),
            ServiceError::UpstreamRejected(message) => message.clone(),
            ServiceError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
