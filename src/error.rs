//! Error types for the vacation engine.
//!
//! The entitlement and overlap calculators never fail; they degrade to zero or
//! empty results. These errors cover everything around them: configuration
//! loading, normalization of backend rows, and validation of new requests.

use thiserror::Error;

/// The main error type for the vacation engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::VacationError;
///
/// let error = VacationError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum VacationError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was inconsistent.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A vacation request was invalid or contained inconsistent data.
    #[error("Invalid vacation request '{request_id}': {message}")]
    InvalidRequest {
        /// The ID of the invalid request, or empty when the row had none.
        request_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// The requested days exceed the employee's remaining balance.
    #[error("Insufficient balance: requested {requested} days, {remaining} remaining")]
    InsufficientBalance {
        /// Business days covered by the new request.
        requested: u32,
        /// Days left in the employee's balance.
        remaining: u32,
    },
}

/// A type alias for Results that return VacationError.
pub type VacationResult<T> = Result<T, VacationError>;
