//! Error types for tsp-tournament.
//!
//! Loading and configuration failures are fatal for a run and are surfaced
//! immediately. The core algorithms validate only at their boundary
//! ([`tournament_select`](crate::ga::tournament_select),
//! [`GaConfig::validate`](crate::ga::GaConfig::validate)).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tsp-tournament operations.
pub type EvoResult<T> = Result<T, EvoError>;

/// Unified error type for all tsp-tournament operations.
#[derive(Debug, Error)]
pub enum EvoError {
    /// A file could not be opened or read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed distance-matrix input.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Missing, mistyped, or out-of-range configuration value.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error in a configuration file.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Out-of-contract input to a core operation.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated contract.
        message: String,
    },
}

impl EvoError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error at 1-based `line`.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error originates from configuration loading.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Yaml(_))
    }
}
