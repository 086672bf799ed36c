//! Budget summary aggregation.
//!
//! Runs the tax, rental and expense calculations over one input record and
//! combines their results. Income components are rounded to cents before
//! they are summed, so totals can drift by a cent from rounding the
//! unrounded sum.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::BudgetResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BudgetForm, BudgetInputRecord, BudgetSummary,
    SummaryCalculation, TaxSchedule,
};

use super::{calculate_monthly_expenses, calculate_monthly_salary, calculate_rental_income};

/// Computes the budget summary under the default tax schedule.
///
/// # Errors
///
/// Fails with [`crate::error::BudgetError::NegativeSalary`] when the yearly
/// salary is below zero, and with
/// [`crate::error::BudgetError::AmountOutOfRange`] when any amount exceeds
/// [`crate::models::MAX_AMOUNT`]. Nothing is partially computed.
///
/// # Examples
///
/// ```
/// use fudget::calculation::compute_summary;
/// use fudget::models::{BudgetInputRecord, ExpenseEntry, Frequency};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = BudgetInputRecord {
///     yearly_salary: Decimal::new(90_000, 0),
///     weekly_rental: Decimal::new(500, 0),
///     savings_target_percent: Decimal::new(20, 0),
///     expenses: vec![ExpenseEntry::new("Groceries", Decimal::new(200, 0), Frequency::Weekly)],
/// };
///
/// let summary = compute_summary(&record).unwrap();
/// assert_eq!(summary.total_monthly_income, Decimal::from_str("8023.59").unwrap());
/// assert_eq!(summary.total_monthly_expenses, Decimal::new(800, 0));
/// ```
pub fn compute_summary(record: &BudgetInputRecord) -> BudgetResult<BudgetSummary> {
    compute_summary_with_schedule(record, &TaxSchedule::default())
}

/// Computes the budget summary under a specific tax schedule.
pub fn compute_summary_with_schedule(
    record: &BudgetInputRecord,
    schedule: &TaxSchedule,
) -> BudgetResult<BudgetSummary> {
    compute_summary_with_trace(record, schedule).map(|calculation| calculation.summary)
}

/// Parses a submitted form and computes its summary with a full trace.
///
/// A malformed number or unknown frequency anywhere in the form aborts the
/// whole computation.
pub fn compute_summary_from_form(
    form: &BudgetForm,
    schedule: &TaxSchedule,
) -> BudgetResult<SummaryCalculation> {
    let record = form.to_record()?;
    compute_summary_with_trace(&record, schedule)
}

/// Computes the budget summary and records every step in an audit trace.
pub fn compute_summary_with_trace(
    record: &BudgetInputRecord,
    schedule: &TaxSchedule,
) -> BudgetResult<SummaryCalculation> {
    record.check_amounts()?;

    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(5);

    let rental = calculate_rental_income(record.weekly_rental, 1);
    let monthly_rental_income = rental.monthly_income;
    steps.push(rental.audit_step);

    let salary = calculate_monthly_salary(record.yearly_salary, schedule, 2)?;
    let monthly_salary_income = salary.monthly_net;
    steps.push(salary.audit_step);

    let total_monthly_income = monthly_salary_income + monthly_rental_income;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "total_income".to_string(),
        rule_name: "Total Monthly Income".to_string(),
        input: serde_json::json!({
            "monthly_salary_income": monthly_salary_income.to_string(),
            "monthly_rental_income": monthly_rental_income.to_string()
        }),
        output: serde_json::json!({
            "total_monthly_income": total_monthly_income.to_string()
        }),
        reasoning: format!(
            "${} + ${} = ${}",
            monthly_salary_income, monthly_rental_income, total_monthly_income
        ),
    });

    let target_monthly_savings =
        total_monthly_income * (record.savings_target_percent / Decimal::ONE_HUNDRED);
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "savings_target".to_string(),
        rule_name: "Savings Target".to_string(),
        input: serde_json::json!({
            "total_monthly_income": total_monthly_income.to_string(),
            "savings_target_percent": record.savings_target_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "target_monthly_savings": target_monthly_savings.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {}% = ${}",
            total_monthly_income,
            record.savings_target_percent.normalize(),
            target_monthly_savings.normalize()
        ),
    });

    let expenses = calculate_monthly_expenses(&record.expenses, 5);
    let total_monthly_expenses = expenses.monthly_total;
    steps.push(expenses.audit_step);

    let summary = BudgetSummary {
        monthly_salary_income,
        monthly_rental_income,
        total_monthly_income,
        target_monthly_savings,
        total_monthly_expenses,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        schedule = schedule.name(),
        expenses = record.expenses.len(),
        total_monthly_income = %summary.total_monthly_income,
        duration_us,
        "Budget summary computed"
    );

    Ok(SummaryCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_schedule: schedule.name().to_string(),
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings: input_warnings(record),
            duration_us,
        },
    })
}

/// Flags inputs that are accepted but are probably not what the user meant.
fn input_warnings(record: &BudgetInputRecord) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if record.savings_target_percent < Decimal::ZERO
        || record.savings_target_percent > Decimal::ONE_HUNDRED
    {
        warnings.push(AuditWarning {
            code: "SAVINGS_TARGET_OUT_OF_RANGE".to_string(),
            message: format!(
                "Savings target {}% is outside 0-100%",
                record.savings_target_percent.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    if record.weekly_rental < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_RENTAL_INCOME".to_string(),
            message: format!(
                "Weekly rental income is negative ({})",
                record.weekly_rental.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    for (index, expense) in record.expenses.iter().enumerate() {
        if expense.amount < Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "NEGATIVE_EXPENSE_AMOUNT".to_string(),
                message: format!(
                    "Expense {} ('{}') has a negative amount ({})",
                    index,
                    expense.name,
                    expense.amount.normalize()
                ),
                severity: "low".to_string(),
            });
        }
    }

    warnings
}
