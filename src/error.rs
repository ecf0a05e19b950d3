//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Solution file loading/parsing errors
    #[error("Solution file error in {file:?}: {message}")]
    SolutionFile { file: PathBuf, message: String },

    /// JSON encoding/decoding errors
    #[error("JSON error: {0}")]
    Json(String),

    /// An expected relation is absent from the solver output
    #[error("Relation `{0}` missing from solution")]
    MissingRelation(String),

    /// A relation tuple has the wrong arity or an unparseable position column
    #[error("Malformed relation `{relation}`: {message}")]
    MalformedRelation { relation: String, message: String },

    /// A position sequence has gaps or duplicate indices
    #[error("Position sequence of `{entity}` is not dense: {message}")]
    DenseIndex { entity: String, message: String },

    /// A stepped transition is missing one of its four fields
    #[error("Transition `{transition}` has no {field}")]
    DanglingField {
        transition: String,
        field: &'static str,
    },

    /// The same write-once field was set twice with different values
    #[error("Conflicting {field} for `{entity}`: `{previous}` vs `{new}`")]
    ConflictingField {
        entity: String,
        field: &'static str,
        previous: String,
        new: String,
    },

    /// A stepped transition's prestate does not match the execution's current state
    #[error(
        "Walk inconsistency in `{execution}`: transition `{transition}` expects prestate `{expected}` but the execution is at `{found}`"
    )]
    WalkInconsistency {
        execution: String,
        transition: String,
        expected: String,
        found: String,
    },

    /// An execution appears in the step relation but has no initial state
    #[error("Execution `{0}` has no initial state")]
    UninitializedExecution(String),

    /// The solver found no satisfying instance
    #[error("No solution")]
    NoSolution,

    /// The requested solution index is past the last satisfying instance
    #[error("No more solutions")]
    NoMoreSolutions,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed relation error
    pub fn malformed_relation(relation: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MalformedRelation {
            relation: relation.into(),
            message: msg.into(),
        }
    }

    /// Create a dense-index violation error
    pub fn dense_index(entity: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::DenseIndex {
            entity: entity.into(),
            message: msg.into(),
        }
    }

    /// Check if error means "unsatisfiable", as opposed to an import failure
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Error::NoSolution | Error::NoMoreSolutions)
    }
}

// Implement From traits for common external error types

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}
