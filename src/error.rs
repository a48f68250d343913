//! Error types for configuration, response parsing and the extraction seam
//!
//! The selector and the merge engine never fail; these errors only surface
//! where the crate touches files, the environment or raw model output.

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, ContextError>;

/// Errors raised outside the pure aggregation core
#[derive(Error, Debug)]
pub enum ContextError {
    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to read or deserialize configuration sources
    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    /// Malformed JSON from the model or an input summary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A single extraction call failed
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextError {
    /// Short text recorded in a failed section's `error` field
    pub fn note_text(&self) -> String {
        match self {
            Self::Extraction(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_note_text_is_bare_reason() {
        let err = ContextError::Extraction("timeout".to_string());
        assert_eq!(err.note_text(), "timeout");
        assert_eq!(err.to_string(), "Extraction failed: timeout");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ContextError = parse.unwrap_err().into();
        assert!(matches!(err, ContextError::Serialization(_)));
    }
}
