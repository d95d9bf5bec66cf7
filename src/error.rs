use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("store error: {message}")]
    Store { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation { message }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::auth", %message, "authentication error");
        AppError::Auth { message }
    }

    pub fn not_found() -> Self {
        warn!(target: "app::store", "record not found");
        AppError::NotFound
    }

    pub fn store(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::store", %message, "store error");
        AppError::Store { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}
