//! Error types for the dojo engine and its configuration

use std::path::PathBuf;

/// Errors surfaced by configuration handling
#[derive(Debug, thiserror::Error)]
pub enum DojoError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Unknown mode: {0} (expected add or sub)")]
    UnknownMode(String),
}

/// Why a raw answer could not be read as an integer.
///
/// Never returned to engine callers: `check_answer` folds it into a wrong answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("Answer is empty")]
    Empty,

    #[error("Not a whole number: {0}")]
    NotANumber(String),
}

/// Parse a typed answer. Surrounding whitespace and a leading sign are accepted.
pub fn parse_answer(raw: &str) -> Result<i64, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AnswerError::NotANumber(trimmed.to_string()))
}
