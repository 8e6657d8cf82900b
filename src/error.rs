// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

// endregion: --- Imports

// region:    --- App Error

/// Every failure an endpoint can report. Each variant fixes the status code
/// and the message the caller sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already in use.")]
    EmailTaken,

    #[error("User not found.")]
    UserNotFound,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Auction not found")]
    AuctionNotFound,

    #[error("Access Denied: No Token Provided")]
    MissingToken,

    #[error("Invalid Token")]
    InvalidToken,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::EmailTaken
            | AppError::UserNotFound
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::AuctionNotFound => StatusCode::NOT_FOUND,
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Server-side failures never expose
    /// their cause.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "Server error. Try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{:<12} --> {}", "Error", self);
        } else {
            warn!("{:<12} --> {} ({})", "Error", self, status);
        }

        (
            status,
            Json(json!({
                "success": false,
                "message": self.public_message(),
            })),
        )
            .into_response()
    }
}

// endregion: --- App Error

// endregion: --- Tests
