//! Error types for the estimator library.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for estimator operations.
///
/// Field-level input problems while typing are reported through
/// [`crate::input::InputError`] instead; this type covers everything that
/// crosses a component boundary.
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors, including a missing service credential
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Transport-level failures talking to the narrative service
    #[error("Narrative service error: {message}")]
    Remote {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The narrative service answered with a non-success status
    #[error("Narrative service returned HTTP status {status}")]
    Status { status: u16 },
    /// The narrative service answered but produced no text
    #[error("Narrative service returned no content")]
    EmptyResponse,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating remote call errors with optional context.
pub struct RemoteErrorBuilder {
    message: String,
}

impl RemoteErrorBuilder {
    /// Create a new remote error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> EstimatorError {
        EstimatorError::Remote {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> EstimatorError {
        EstimatorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl EstimatorError {
    /// Creates a builder for remote call errors.
    pub fn remote(message: impl Into<String>) -> RemoteErrorBuilder {
        RemoteErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to EstimatorError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for HTTP client Results.
pub trait RemoteResultExt<T> {
    /// Map transport errors with a message.
    fn remote_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| EstimatorError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> RemoteResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn remote_context(self, message: &str) -> Result<T> {
        self.map_err(|e| EstimatorError::remote(message).with_source(e))
    }
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = EstimatorError::invalid_input("acres").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'acres': must be positive"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let err = EstimatorError::configuration("API_KEY is not set");
        assert_eq!(err.to_string(), "Configuration error: API_KEY is not set");
    }

    #[test]
    fn test_with_context_maps_to_configuration() {
        let raw: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = raw.with_context("reading settings").unwrap_err();
        assert!(matches!(err, EstimatorError::Configuration { .. }));
        assert!(err.to_string().contains("reading settings: boom"));
    }

    #[test]
    fn test_status_error_display() {
        let err = EstimatorError::Status { status: 503 };
        assert_eq!(err.to_string(), "Narrative service returned HTTP status 503");
    }
}
