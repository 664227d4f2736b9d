use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure talking to the recommendation backend.
///
/// Callers branch on the variant rather than on message content. The message
/// carried by each variant is what the backend (or the transport) reported.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend rejected request ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Backend failed ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success HTTP status.
    pub fn from_status(status: u16, message: String) -> Self {
        if status >= 500 {
            ApiError::Server { status, message }
        } else {
            ApiError::Client { status, message }
        }
    }

    /// The human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unreachable(msg) | ApiError::Decode(msg) => msg,
            ApiError::Client { message, .. } | ApiError::Server { message, .. } => message,
        }
    }

    /// HTTP status reported by the backend, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Unreachable(_) | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Unreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] ApiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream(err) => {
                let status = match &err {
                    ApiError::Client { status, .. } => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    ApiError::Server { .. } | ApiError::Unreachable(_) | ApiError::Decode(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, err.message().to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
