//! Discretionary spending figures derived from a stored summary.
//!
//! Two ways of presenting "what is left" exist and both are kept:
//! [`monthly_spend_available`] sets the savings target aside first, while
//! [`income_after_expenses`] only subtracts expenses. Neither is stored;
//! both are recomputed from a [`BudgetSummary`] whenever they are shown.

use rust_decimal::Decimal;

use crate::models::BudgetSummary;

/// Income left after the savings target and all expenses.
///
/// # Examples
///
/// ```
/// use fudget::calculation::monthly_spend_available;
/// use fudget::models::BudgetSummary;
/// use rust_decimal::Decimal;
///
/// let summary = BudgetSummary {
///     monthly_salary_income: Decimal::new(4000, 0),
///     monthly_rental_income: Decimal::new(1000, 0),
///     total_monthly_income: Decimal::new(5000, 0),
///     target_monthly_savings: Decimal::new(1000, 0),
///     total_monthly_expenses: Decimal::new(2500, 0),
/// };
/// assert_eq!(monthly_spend_available(&summary), Decimal::new(1500, 0));
/// ```
pub fn monthly_spend_available(summary: &BudgetSummary) -> Decimal {
    summary.total_monthly_income - summary.target_monthly_savings - summary.total_monthly_expenses
}

/// Income left after expenses, with the savings target not set aside.
pub fn income_after_expenses(summary: &BudgetSummary) -> Decimal {
    summary.total_monthly_income - summary.total_monthly_expenses
}
