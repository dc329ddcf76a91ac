//! Bot client errors.

use thiserror::Error;

/// Errors from talking to the bot service.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("AI bot service is not available: {0}")]
    Unavailable(String),

    #[error("Too many requests, wait a moment before trying again")]
    RateLimited,

    #[error("AI bot service is experiencing issues (status {0})")]
    Server(u16),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Request rejected by service: {0}")]
    Rejected(String),

    #[error("Translation service is currently unavailable: {0}")]
    TranslationUnavailable(String),
}

impl BotError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => BotError::RateLimited,
            s if s >= 500 => BotError::Server(s),
            s => BotError::Http { status: s, body },
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
