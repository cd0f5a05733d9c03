//! Error types for the shared crate
//!
//! Every failure in this workspace happens at the configuration boundary:
//! the pure status/link/address functions are total over validated models.

use thiserror::Error;

const VALIDATION_PREFIX: &str = "Validation error: ";

/// Business configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an IO error carrying the offending path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify a JSON deserialization failure
    ///
    /// Model types validate inside serde `try_from`, which wraps our
    /// validation message in a data error. Those come back as
    /// [`ConfigError::Validation`]; syntax and shape errors stay `Parse`.
    pub fn from_json(err: serde_json::Error) -> Self {
        if err.classify() == serde_json::error::Category::Data {
            let msg = err.to_string();
            if let Some(inner) = msg.strip_prefix(VALIDATION_PREFIX) {
                return Self::Validation(inner.to_string());
            }
        }
        Self::Parse(err)
    }

    /// Whether this is a validation failure (as opposed to IO / parse)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
