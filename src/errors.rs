//! Error types for the multi-cluster version crate
//!
//! The token itself never fails: the best-effort constructors degrade to an
//! empty token. These errors back the strict parse path and the CLI.

use thiserror::Error;

/// Main error type for strict token handling and tooling
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Malformed resource version {input:?}: {source}")]
    Malformed {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid assignment {argument:?}: expected <cluster>=<version>")]
    InvalidAssignment { argument: String },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result with VersionError
pub type VersionResult<T> = Result<T, VersionError>;

impl VersionError {
    /// Create a malformed-input error
    pub fn malformed(input: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            input: input.into(),
            source,
        }
    }

    /// Create an invalid assignment error
    pub fn invalid_assignment(argument: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            argument: argument.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// True when the error came from rejecting token input
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
