//! Error types for the Trip Expense Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Most errors here stay internal to the data resolution chains: a failed
//! source is logged and the chain falls through to the next source, so the
//! only errors that reach API callers are unknown-employee lookups and
//! validation messages.

use thiserror::Error;

/// The main error type for the Trip Expense Engine.
///
/// # Example
///
/// ```
/// use trip_expense_engine::error::ExpenseError;
///
/// let error = ExpenseError::EmployeeNotFound {
///     name: "unknown-name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: unknown-name");
/// ```
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// A data source (file or secret store) was not present.
    #[error("Data source not available: {path}")]
    SourceUnavailable {
        /// The path that was not available.
        path: String,
    },

    /// A data source existed but could not be parsed.
    #[error("Failed to parse data source '{path}': {message}")]
    SourceParse {
        /// The path to the source that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required column was missing from a tabular source.
    #[error("Missing column '{column}' in '{path}'")]
    MissingColumn {
        /// The path to the tabular source.
        path: String,
        /// The column that was not found.
        column: String,
    },

    /// A rate cell could not be converted to a whole currency amount.
    #[error("Invalid rate value '{value}' for {field}")]
    InvalidRate {
        /// The field or column the value came from.
        field: String,
        /// The offending value, as read from the source.
        value: String,
    },

    /// No employee with the given name exists in the directory.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The reference data document could not be written.
    #[error("Failed to persist reference data to '{path}': {message}")]
    StorePersist {
        /// The path of the persisted document.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// The reference store failed validation.
    #[error("Reference data validation failed: {message}")]
    ValidationFailed {
        /// What was missing or empty.
        message: String,
    },
}

/// A type alias for Results that return ExpenseError.
pub type ExpenseResult<T> = Result<T, ExpenseError>;
