// --- File: crates/meetline_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Meetline errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for MeetlineError.
#[derive(Error, Debug)]
pub enum MeetlineError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred while reading or writing the backing store
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred due to a conflict (e.g., slot already taken)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for MeetlineError {
    fn status_code(&self) -> u16 {
        match self {
            MeetlineError::ParseError(_) => 400,
            MeetlineError::ConfigError(_) => 500,
            MeetlineError::ValidationError(_) => 400,
            MeetlineError::StoreError(_) => 500,
            MeetlineError::ConflictError(_) => 409,
            MeetlineError::NotFoundError(_) => 404,
            MeetlineError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, MeetlineError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, MeetlineError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, MeetlineError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| MeetlineError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, MeetlineError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| MeetlineError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<serde_json::Error> for MeetlineError {
    fn from(err: serde_json::Error) -> Self {
        MeetlineError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for MeetlineError {
    fn from(err: std::io::Error) -> Self {
        MeetlineError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> MeetlineError {
    MeetlineError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> MeetlineError {
    MeetlineError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> MeetlineError {
    MeetlineError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> MeetlineError {
    MeetlineError::ConflictError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> MeetlineError {
    MeetlineError::InternalError(message.to_string())
}
