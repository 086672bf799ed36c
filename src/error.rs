//! Error types for the budget engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a budget calculation, configuration load or store
//! operation can produce.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the budget engine.
///
/// # Example
///
/// ```
/// use fudget::error::BudgetError;
///
/// let error = BudgetError::UnknownFrequency {
///     tag: "hourly".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid frequency: hourly");
/// assert!(error.is_invalid_input());
/// ```
#[derive(Debug, Error)]
pub enum BudgetError {
    /// The yearly salary was below zero.
    #[error("Yearly salary must be a non-negative value.")]
    NegativeSalary {
        /// The rejected salary.
        value: Decimal,
    },

    /// A frequency tag was not one of the supported frequencies.
    #[error("Invalid frequency: {tag}")]
    UnknownFrequency {
        /// The tag that could not be recognised.
        tag: String,
    },

    /// A form field did not contain a decimal number.
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber {
        /// The form field that failed to parse.
        field: String,
        /// The raw value that was supplied.
        value: String,
    },

    /// An amount was too large in magnitude to calculate with.
    #[error("Amount for '{field}' is outside the supported range: {value}")]
    AmountOutOfRange {
        /// The field holding the amount.
        field: String,
        /// The rejected amount.
        value: Decimal,
    },

    /// A tax schedule broke one of the bracket ordering or rate rules.
    #[error("Invalid tax schedule: {message}")]
    InvalidTaxSchedule {
        /// A description of the broken rule.
        message: String,
    },

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

    /// Reading or writing persisted budget state failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl BudgetError {
    /// Returns true for errors caused by the values a user supplied, as
    /// opposed to configuration or storage failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BudgetError::NegativeSalary { .. }
                | BudgetError::UnknownFrequency { .. }
                | BudgetError::InvalidNumber { .. }
                | BudgetError::AmountOutOfRange { .. }
        )
    }
}

/// A type alias for Results that return BudgetError.
pub type BudgetResult<T> = Result<T, BudgetError>;
