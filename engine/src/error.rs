//! Build error taxonomy.
//!
//! Every [`BuildError`] is fatal: the orchestrator stops at the first one and
//! nothing is exported. [`RecordDecodeError`] is the only non-fatal kind; it is
//! carried inside walk entries and collected into the build report.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal build failure.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The descriptor is missing a required field or holds an invalid value.
    #[error("invalid build descriptor: {0}")]
    Config(String),

    /// The descriptor names a graph model that no registered plugin defines.
    #[error("class `{class_name}` not found in definition `{}`", .location.display())]
    PluginLoad {
        /// The `class_definition` location from the descriptor.
        location: PathBuf,
        /// The `ontology` class name from the descriptor.
        class_name: String,
    },

    /// A handler named in the descriptor is not a step of the loaded model.
    #[error("`{model}` has no step named `{step}` (available: {available})")]
    UnknownStep {
        /// Class name of the loaded model.
        model: String,
        /// The unresolved handler name.
        step: String,
        /// Comma-separated list of the model's steps.
        available: String,
    },

    /// The configured record extension has no decoder.
    #[error("`{0}` is not a supported record format (expected `toml` or `json`)")]
    UnsupportedFormat(String),

    /// The source directory does not exist.
    #[error("source directory `{}` does not exist", .0.display())]
    NotFound(PathBuf),

    /// `create_subject` or a step failed on a record.
    #[error("step `{step}` failed on `{}`: {source}", .path.display())]
    Step {
        /// The record file being processed.
        path: PathBuf,
        /// `create_subject` or the handler name.
        step: String,
        /// The underlying failure.
        #[source]
        source: StepError,
    },

    /// Writing the output graph failed.
    #[error("failed to write `{}`: {source}", .path.display())]
    Export {
        /// The output destination.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A failure inside `create_subject` or a handler step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    /// A field the step cannot do without is absent.
    #[error("required field `{0}` is missing")]
    MissingField(String),

    /// A field is present but has the wrong shape.
    #[error("field `{field}` must be {expected}")]
    FieldType {
        /// The offending field name.
        field: String,
        /// Description of the accepted shape (e.g., `"a string"`).
        expected: &'static str,
    },
}

/// A record file that could not be read or decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RecordDecodeError {
    /// Human-readable decoder or I/O message.
    pub message: String,
}

impl RecordDecodeError {
    /// Creates a decode error from any displayable cause.
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self {
            message: cause.to_string(),
        }
    }
}
