//! Error types for the fallible edges of the crate.
//!
//! Engine, tracker and panel operations are total and return no errors.
//! Only parsing user text, decoding checkpoints and loading configuration
//! can fail.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::checkpoint::CheckpointError;

/// A color name that is not a member of the palette.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown color '{input}'")]
pub struct ParseColorError {
    pub input: String,
}

/// Text that does not name a panel intent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown intent '{input}', expected one of: advance, retreat, reset, disable, enable")]
pub struct ParseIntentError {
    pub input: String,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Every invalid field, reported together
    #[error("Invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_problems_are_joined() {
        let err = ConfigError::Invalid(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Invalid config: a; b");
    }

    #[test]
    fn intent_error_names_the_input() {
        let err = ParseIntentError {
            input: "jump".into(),
        };
        assert!(err.to_string().starts_with("Unknown intent 'jump'"));
    }
}
