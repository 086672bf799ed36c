//! Response types for the budget API.
//!
//! This module defines the error response structures, the mapping from
//! [`BudgetError`] to HTTP status codes, and the view returned when a
//! saved budget is loaded.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{income_after_expenses, monthly_spend_available};
use crate::error::BudgetError;
use crate::models::{BudgetForm, BudgetSummary, MAX_AMOUNT};
use crate::storage::StoredBudget;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BudgetError> for ApiErrorResponse {
    fn from(error: BudgetError) -> Self {
        let message = error.to_string();
        match error {
            BudgetError::NegativeSalary { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_SALARY",
                    message,
                    format!("Received yearly salary {}", value),
                ),
            },
            BudgetError::UnknownFrequency { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_FREQUENCY",
                    message,
                    format!(
                        "'{}' is not one of daily, weekly, fortnightly, monthly, quarterly, yearly",
                        tag
                    ),
                ),
            },
            BudgetError::InvalidNumber { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_NUMBER",
                    message,
                    format!("Field '{}' must be a decimal number", field),
                ),
            },
            BudgetError::AmountOutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    message,
                    format!("Field '{}' must be between -{} and {}", field, MAX_AMOUNT, MAX_AMOUNT),
                ),
            },
            BudgetError::InvalidTaxSchedule { .. }
            | BudgetError::ConfigNotFound { .. }
            | BudgetError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            BudgetError::Storage { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage error", message),
            },
        }
    }
}

/// The saved budget as returned by `GET /budget`.
///
/// When nothing has been saved yet the form holds its defaults and every
/// derived figure is `null`. Both discretionary figures are included; which
/// one to display is left to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetView {
    /// The saved form, or the default form.
    pub form: BudgetForm,
    /// The saved summary.
    pub summary: Option<BudgetSummary>,
    /// When the budget was saved.
    pub saved_at: Option<DateTime<Utc>>,
    /// Income less savings target and expenses.
    pub monthly_spend_available: Option<Decimal>,
    /// Income less expenses only.
    pub income_after_expenses: Option<Decimal>,
}

impl From<Option<StoredBudget>> for BudgetView {
    fn from(stored: Option<StoredBudget>) -> Self {
        match stored {
            Some(stored) => BudgetView {
                monthly_spend_available: Some(monthly_spend_available(&stored.summary)),
                income_after_expenses: Some(income_after_expenses(&stored.summary)),
                saved_at: Some(stored.saved_at),
                summary: Some(stored.summary),
                form: stored.form,
            },
            None => BudgetView {
                form: BudgetForm::default(),
                summary: None,
                saved_at: None,
                monthly_spend_available: None,
                income_after_expenses: None,
            },
        }
    }
}
