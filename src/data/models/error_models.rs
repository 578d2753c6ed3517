use thiserror::Error;

// Errors surfaced to HTTP handlers
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid HSK level {0}, expected 1-7")]
    InvalidLevel(String),
    #[error("No {0} session in progress")]
    NoActiveSession(&'static str),
    #[error("Session error: {0}")]
    SessionError(String),
    #[error("Render error: {0}")]
    RenderError(String),
}

// Errors while reading a vocabulary file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed word list {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
