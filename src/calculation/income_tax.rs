//! Progressive income-tax calculation.
//!
//! This module converts a gross yearly salary into a net monthly salary by
//! taxing each slice of income at its bracket's marginal rate.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{AuditStep, TaxSchedule};

use super::round_currency;

/// Months in a year, used to spread yearly amounts.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The tax charged on one bracket's slice of a salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSlice {
    /// Exclusive lower bound of the slice.
    pub lower: Decimal,
    /// Inclusive upper bound, or `None` when the salary ended in this slice.
    pub upper: Option<Decimal>,
    /// Marginal rate applied to the slice.
    pub rate: Decimal,
    /// Tax charged on the slice.
    pub tax: Decimal,
}

/// The result of taxing a yearly salary, including the audit step.
#[derive(Debug, Clone)]
pub struct SalaryTaxResult {
    /// Total tax for the year.
    pub annual_tax: Decimal,
    /// Net salary per month, rounded to cents.
    pub monthly_net: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits a salary into the bracket slices it falls across.
///
/// Brackets are walked in ascending order. While the salary exceeds a
/// bracket's threshold the whole slice is taxed; the bracket the salary
/// ends in is taxed on the remainder only and no later bracket is visited.
pub fn tax_slices(yearly_salary: Decimal, schedule: &TaxSchedule) -> Vec<TaxSlice> {
    let mut slices = Vec::new();
    let mut previous = Decimal::ZERO;

    for bracket in schedule.brackets() {
        match bracket.threshold {
            Some(threshold) if yearly_salary > threshold => {
                slices.push(TaxSlice {
                    lower: previous,
                    upper: Some(threshold),
                    rate: bracket.rate,
                    tax: (threshold - previous) * bracket.rate,
                });
                previous = threshold;
            }
            _ => {
                slices.push(TaxSlice {
                    lower: previous,
                    upper: None,
                    rate: bracket.rate,
                    tax: (yearly_salary - previous) * bracket.rate,
                });
                break;
            }
        }
    }

    slices
}

/// Returns the total yearly tax on a salary under `schedule`.
pub fn annual_income_tax(yearly_salary: Decimal, schedule: &TaxSchedule) -> Decimal {
    tax_slices(yearly_salary, schedule)
        .iter()
        .map(|slice| slice.tax)
        .sum()
}

/// Taxes a yearly salary and converts the remainder to a monthly amount.
///
/// # Arguments
///
/// * `yearly_salary` - Gross salary for the year; must not be negative
/// * `schedule` - The brackets to tax against
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`BudgetError::NegativeSalary`] when `yearly_salary` is below zero.
///
/// # Examples
///
/// ```
/// use fudget::calculation::calculate_monthly_salary;
/// use fudget::models::TaxSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = TaxSchedule::default();
/// let result = calculate_monthly_salary(Decimal::new(45_000, 0), &schedule, 1).unwrap();
/// assert_eq!(result.annual_tax, Decimal::new(5_092, 0));
/// assert_eq!(result.monthly_net, Decimal::from_str("3325.67").unwrap());
/// ```
pub fn calculate_monthly_salary(
    yearly_salary: Decimal,
    schedule: &TaxSchedule,
    step_number: u32,
) -> BudgetResult<SalaryTaxResult> {
    if yearly_salary < Decimal::ZERO {
        return Err(BudgetError::NegativeSalary {
            value: yearly_salary,
        });
    }

    let slices = tax_slices(yearly_salary, schedule);
    let annual_tax: Decimal = slices.iter().map(|slice| slice.tax).sum();
    let monthly_net = round_currency((yearly_salary - annual_tax) / MONTHS_PER_YEAR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Progressive Income Tax".to_string(),
        input: serde_json::json!({
            "yearly_salary": yearly_salary.normalize().to_string(),
            "schedule": schedule.name()
        }),
        output: serde_json::json!({
            "slices": slices,
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_net": monthly_net.to_string()
        }),
        reasoning: format!(
            "(${} - ${} tax) / 12 = ${}",
            yearly_salary.normalize(),
            annual_tax.normalize(),
            monthly_net
        ),
    };

    Ok(SalaryTaxResult {
        annual_tax,
        monthly_net,
        audit_step,
    })
}

/// Net monthly salary for a gross yearly salary under the default schedule.
///
/// # Examples
///
/// ```
/// use fudget::calculation::monthly_salary_after_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let monthly = monthly_salary_after_tax(Decimal::new(18_200, 0)).unwrap();
/// assert_eq!(monthly, Decimal::from_str("1516.67").unwrap());
/// assert!(monthly_salary_after_tax(Decimal::NEGATIVE_ONE).is_err());
/// ```
pub fn monthly_salary_after_tax(yearly_salary: Decimal) -> BudgetResult<Decimal> {
    calculate_monthly_salary(yearly_salary, &TaxSchedule::default(), 1)
        .map(|result| result.monthly_net)
}
