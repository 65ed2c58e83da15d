use thiserror::Error;

/// Failures reported by the word repository.
///
/// None of these leave the library half-modified: the operation that
/// fails is rejected as a whole.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("A word cannot be empty.")]
    EmptyWord,
    #[error("The word '{0}' must be assigned to at least one class.")]
    NoClassSelected(String),
    #[error("The import file is not in the expected format: {0}")]
    InvalidImport(String),
    #[error("Failed to read or write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading a [`QuizConfig`](crate::QuizConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse the configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration value for '{0}': {1}")]
    Invalid(&'static str, String),
}
