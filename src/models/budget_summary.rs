//! Budget summary models.
//!
//! This module contains the [`BudgetSummary`] produced by the aggregator and
//! the [`SummaryCalculation`] wrapper that pairs it with an audit trace of
//! every step that contributed to it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monthly figures derived from a [`super::BudgetInputRecord`].
///
/// Salary and rental income are each rounded to cents before they are
/// added, so `total_monthly_income` is the sum of two rounded values.
/// `target_monthly_savings` is derived from that total and carries
/// whatever precision the percentage produces. `total_monthly_expenses`
/// is the unrounded sum of monthly equivalents.
///
/// # Example
///
/// ```
/// use fudget::models::BudgetSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = BudgetSummary {
///     monthly_salary_income: Decimal::from_str("5856.92").unwrap(),
///     monthly_rental_income: Decimal::from_str("2166.67").unwrap(),
///     total_monthly_income: Decimal::from_str("8023.59").unwrap(),
///     target_monthly_savings: Decimal::from_str("1604.718").unwrap(),
///     total_monthly_expenses: Decimal::from_str("800").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Net monthly salary after tax.
    pub monthly_salary_income: Decimal,
    /// Weekly rental income expressed per month.
    pub monthly_rental_income: Decimal,
    /// Salary plus rental income.
    pub total_monthly_income: Decimal,
    /// The savings target applied to total income.
    pub target_monthly_savings: Decimal,
    /// Sum of every expense's monthly equivalent.
    pub total_monthly_expenses: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that are accepted but probably unintended, such as
/// a savings target above 100%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a summary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A budget summary together with the record of how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Name of the tax schedule applied to the salary.
    pub tax_schedule: String,
    /// The derived monthly figures.
    pub summary: BudgetSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
