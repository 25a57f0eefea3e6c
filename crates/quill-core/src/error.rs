//! Error types for the wizard library.
//!
//! Validation failures and sink failures are not errors here: they are
//! recorded on the form state and reported through
//! [`SubmitOutcome`](crate::wizard::SubmitOutcome). This type covers the
//! conditions a caller cannot recover from by editing a field.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// A step position outside `1..=total` was supplied
    #[error("Step {step} is out of range (wizard has {total} steps)")]
    StepOutOfRange { step: usize, total: usize },
    /// A field name that no step of the wizard owns
    #[error("Unknown field '{name}' for wizard '{flow}'")]
    UnknownField { flow: String, name: String },
    /// A step definition table that cannot be used
    #[error("Malformed wizard definition '{flow}': {reason}")]
    MalformedDefinition { flow: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for definition errors, scoped to one flow.
pub struct MalformedDefinitionBuilder {
    flow: String,
}

impl MalformedDefinitionBuilder {
    /// Create a new builder for the named flow.
    pub fn new(flow: impl Into<String>) -> Self {
        Self { flow: flow.into() }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::MalformedDefinition {
            flow: self.flow,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for malformed definition errors.
    pub fn malformed(flow: impl Into<String>) -> MalformedDefinitionBuilder {
        MalformedDefinitionBuilder::new(flow)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to WizardError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| WizardError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
