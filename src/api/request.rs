//! Request types for the budget API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Numeric fields may be sent either as JSON numbers or as the
//! raw strings a form produces; both are converted to a [`BudgetForm`].
//! JSON numbers that serialise in exponent form are parsed as such.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetForm, ExpenseForm};

/// A form field that arrived as either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// A raw string, exactly as typed.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl FormValue {
    fn into_text(self) -> String {
        match self {
            FormValue::Text(text) => text,
            FormValue::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Omitted top-level fields take the form defaults (`"0"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross yearly salary.
    #[serde(default)]
    pub yearly_salary: Option<FormValue>,
    /// Weekly rental income.
    #[serde(default)]
    pub weekly_rental: Option<FormValue>,
    /// Savings target percentage.
    #[serde(default)]
    pub savings_target: Option<FormValue>,
    /// Recurring expenses.
    #[serde(default)]
    pub expenses: Vec<ExpenseRequest>,
}

/// Expense information in a calculation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Free-text label.
    #[serde(default)]
    pub name: String,
    /// Amount per period.
    #[serde(default)]
    pub amount: Option<FormValue>,
    /// Frequency tag; defaults to "monthly".
    #[serde(default)]
    pub frequency: Option<String>,
}

impl From<CalculationRequest> for BudgetForm {
    fn from(req: CalculationRequest) -> Self {
        let defaults = BudgetForm::default();
        BudgetForm {
            yearly_salary: req
                .yearly_salary
                .map_or(defaults.yearly_salary, FormValue::into_text),
            weekly_rental: req
                .weekly_rental
                .map_or(defaults.weekly_rental, FormValue::into_text),
            savings_target: req
                .savings_target
                .map_or(defaults.savings_target, FormValue::into_text),
            expenses: req.expenses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ExpenseRequest> for ExpenseForm {
    fn from(req: ExpenseRequest) -> Self {
        let defaults = ExpenseForm::default();
        ExpenseForm {
            name: req.name,
            amount: req.amount.map_or(defaults.amount, FormValue::into_text),
            frequency: req.frequency.unwrap_or(defaults.frequency),
        }
    }
}
