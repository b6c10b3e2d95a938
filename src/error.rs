//! Error types for the quarterback stats service

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, QbError>;

#[derive(Error, Debug)]
pub enum QbError {
    /// Network failure, non-2xx status or undecodable body from the stats provider.
    #[error("Upstream stats request failed: {0}")]
    UpstreamFetch(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,

    /// A store call offloaded to the blocking pool panicked or was cancelled.
    #[error("Blocking store task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl QbError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        QbError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for failures of the external stats provider.
    pub fn is_upstream(&self) -> bool {
        matches!(self, QbError::UpstreamFetch(_))
    }

    /// True for failures of the local record store.
    pub fn is_persistence(&self) -> bool {
        matches!(self, QbError::Persistence(_) | QbError::LockPoisoned)
    }
}
