//! Error types for the tuition grants system.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition raised while entering and assessing applications.

use thiserror::Error;

/// The main error type for the tuition grants system.
///
/// Input errors (`InvalidInputFormat`, `OutOfDomain`, `CapacityExceeded`) are
/// recovered by the console at the point of entry. The remaining variants end
/// the session.
///
/// # Example
///
/// ```
/// use tuition_grants::error::GrantError;
///
/// let error = GrantError::CapacityExceeded { capacity: 5000 };
/// assert_eq!(
///     error.to_string(),
///     "Application store is full (capacity 5000)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum GrantError {
    /// A value could not be parsed as the expected type.
    #[error("Invalid input for '{field}': '{input}' is not a number")]
    InvalidInputFormat {
        /// The field being entered.
        field: String,
        /// The raw text that failed to parse.
        input: String,
    },

    /// A value parsed but lies outside the accepted domain.
    #[error("Value for '{field}' out of range: {message}")]
    OutOfDomain {
        /// The field being entered.
        field: String,
        /// A description of the accepted domain.
        message: String,
    },

    /// The application store cannot accept another record.
    #[error("Application store is full (capacity {capacity})")]
    CapacityExceeded {
        /// The maximum number of records the store holds.
        capacity: usize,
    },

    /// The console input stream reached end of file.
    #[error("Input stream closed")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("Failed to parse configuration '{source_name}': {message}")]
    ConfigParseError {
        /// Name of the configuration source.
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but is internally inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

impl GrantError {
    /// Returns true if the console should re-prompt instead of ending the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GrantError::InvalidInputFormat { .. }
                | GrantError::OutOfDomain { .. }
                | GrantError::CapacityExceeded { .. }
        )
    }
}

/// A type alias for Results that return GrantError.
pub type GrantResult<T> = Result<T, GrantError>;
