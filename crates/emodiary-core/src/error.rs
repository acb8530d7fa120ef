//! Core error types for emodiary-core.
//!
//! The burnout engine itself never fails; these errors cover the surfaces
//! around it: configuration files, entry files, questionnaire answers and
//! guided CBT sessions.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for emodiary-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read an entries file
    #[error("Failed to load entries from {path}: {message}")]
    EntriesLoad { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a leaf of the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Questionnaire answer outside its scale
    #[error("Answer for '{question}' must be between {min} and {max}, got {value}")]
    AnswerOutOfRange {
        question: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    /// Blank text where a response is required
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Navigation past the first or last prompt
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// No exercise is defined for the mood
    #[error("No exercise available for mood '{0}'")]
    NoExercise(String),

    /// Score outside 0..=100
    #[error("Score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
