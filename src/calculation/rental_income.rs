//! Rental income annualisation.
//!
//! Weekly rent is converted to a monthly figure through a 52-week year,
//! `weekly * 52 / 12`, not a weeks-per-month factor such as 4.33.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{MONTHS_PER_YEAR, round_currency};

/// Weeks in a year.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// The result of converting weekly rent to a monthly amount.
#[derive(Debug, Clone)]
pub struct RentalIncomeResult {
    /// Monthly rental income, rounded to cents.
    pub monthly_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts weekly rental income to a monthly amount with an audit step.
///
/// Negative amounts are not rejected; they pass through the arithmetic.
pub fn calculate_rental_income(weekly_rental: Decimal, step_number: u32) -> RentalIncomeResult {
    let monthly_income = monthly_rental_income(weekly_rental);

    let audit_step = AuditStep {
        step_number,
        rule_id: "rental_income".to_string(),
        rule_name: "Rental Income".to_string(),
        input: serde_json::json!({
            "weekly_rental": weekly_rental.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_income": monthly_income.to_string()
        }),
        reasoning: format!(
            "${} x 52 / 12 = ${}",
            weekly_rental.normalize(),
            monthly_income
        ),
    };

    RentalIncomeResult {
        monthly_income,
        audit_step,
    }
}

/// Converts weekly rental income to a monthly amount, rounded to cents.
///
/// # Panics
///
/// Panics on `Decimal` overflow when `weekly_rental` is far beyond
/// [`crate::models::MAX_AMOUNT`]; the summary functions reject such amounts
/// before calling this.
///
/// # Examples
///
/// ```
/// use fudget::calculation::monthly_rental_income;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(monthly_rental_income(Decimal::new(100, 0)), Decimal::from_str("433.33").unwrap());
/// ```
pub fn monthly_rental_income(weekly_rental: Decimal) -> Decimal {
    round_currency(weekly_rental * WEEKS_PER_YEAR / MONTHS_PER_YEAR)
}
