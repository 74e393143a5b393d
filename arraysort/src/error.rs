//! Error types for benchmark runs.

use std::fmt;

use crate::algorithms::Algorithm;
use crate::config::ConfigError;

/// Everything that can end a run early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The run was misconfigured; nothing was executed
    Config(ConfigError),

    /// The validator found the output out of order
    NotSorted {
        algorithm: Algorithm,
        /// First index whose element is smaller than its predecessor
        index: usize,
    },

    /// An injected input had no elements to sort
    EmptyInput,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Config(err) => write!(f, "Configuration error: {}", err),
            SortError::NotSorted { algorithm, index } => write!(
                f,
                "the array has not been properly sorted by {} (first disorder at index {})",
                algorithm, index
            ),
            SortError::EmptyInput => write!(f, "cannot benchmark an empty array"),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SortError {
    fn from(err: ConfigError) -> Self {
        SortError::Config(err)
    }
}

impl SortError {
    /// Whether this error was detected before any work began
    pub fn is_config(&self) -> bool {
        matches!(self, SortError::Config(_) | SortError::EmptyInput)
    }
}
