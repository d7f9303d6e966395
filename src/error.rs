//! Error types for voicebox

use std::io;
use thiserror::Error;

/// Main error type for voicebox
#[derive(Error, Debug)]
pub enum VoiceboxError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for voicebox operations
pub type Result<T> = std::result::Result<T, VoiceboxError>;

impl From<String> for VoiceboxError {
    fn from(s: String) -> Self {
        VoiceboxError::Other(s)
    }
}

impl From<&str> for VoiceboxError {
    fn from(s: &str) -> Self {
        VoiceboxError::Other(s.to_string())
    }
}

/// Rejections raised while rendering or changing the selection
///
/// None of these are fatal: callers log them and keep the previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{0} container not found")]
    MissingContainer(&'static str),

    #[error("No languages available")]
    NoLanguages,

    #[error("No voices available for {0}")]
    NoVoices(String),

    #[error("Invalid language selected: {0}")]
    InvalidLanguage(String),

    #[error("Invalid voice selected: {0}")]
    InvalidVoice(String),
}
