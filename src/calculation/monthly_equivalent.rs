//! Expense frequency normalisation.
//!
//! Every recurring amount is reduced to a per-month figure using fixed
//! calendar approximations: 30-day months, 4 weeks or 2 fortnights a month.
//! No rounding happens here.

use rust_decimal::Decimal;

use crate::error::BudgetResult;
use crate::models::{AuditStep, ExpenseEntry, Frequency};

/// Days counted in a month.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
/// Weeks counted in a month.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
/// Fortnights counted in a month.
pub const FORTNIGHTS_PER_MONTH: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
/// Months in a quarter.
pub const MONTHS_PER_QUARTER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// The result of normalising a list of expenses.
#[derive(Debug, Clone)]
pub struct MonthlyExpensesResult {
    /// Sum of every expense's monthly equivalent.
    pub monthly_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts an amount paid at `frequency` into its monthly equivalent.
///
/// | Frequency   | Conversion |
/// |-------------|------------|
/// | daily       | × 30       |
/// | weekly      | × 4        |
/// | fortnightly | × 2        |
/// | monthly     | × 1        |
/// | quarterly   | ÷ 3        |
/// | yearly      | ÷ 12       |
///
/// # Panics
///
/// Panics on `Decimal` overflow when `amount` is far beyond
/// [`crate::models::MAX_AMOUNT`]; the summary functions reject such amounts
/// before calling this.
///
/// # Examples
///
/// ```
/// use fudget::calculation::monthly_equivalent;
/// use fudget::models::Frequency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_equivalent(Decimal::new(30, 0), Frequency::Daily), Decimal::new(900, 0));
/// ```
pub fn monthly_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Daily => amount * DAYS_PER_MONTH,
        Frequency::Weekly => amount * WEEKS_PER_MONTH,
        Frequency::Fortnightly => amount * FORTNIGHTS_PER_MONTH,
        Frequency::Monthly => amount,
        Frequency::Quarterly => amount / MONTHS_PER_QUARTER,
        Frequency::Yearly => amount / super::MONTHS_PER_YEAR,
    }
}

/// Like [`monthly_equivalent`], for a frequency tag that has not been
/// parsed yet.
///
/// # Errors
///
/// Returns [`crate::error::BudgetError::UnknownFrequency`] when `tag` is not
/// one of the six supported frequencies.
pub fn monthly_equivalent_for_tag(amount: Decimal, tag: &str) -> BudgetResult<Decimal> {
    let frequency: Frequency = tag.parse()?;
    Ok(monthly_equivalent(amount, frequency))
}

/// Sums the monthly equivalents of `expenses`, with an audit step.
pub fn calculate_monthly_expenses(
    expenses: &[ExpenseEntry],
    step_number: u32,
) -> MonthlyExpensesResult {
    let lines: Vec<serde_json::Value> = expenses
        .iter()
        .map(|expense| {
            serde_json::json!({
                "name": expense.name,
                "amount": expense.amount.normalize().to_string(),
                "frequency": expense.frequency.as_str(),
                "monthly": monthly_equivalent(expense.amount, expense.frequency)
                    .normalize()
                    .to_string()
            })
        })
        .collect();

    let monthly_total: Decimal = expenses
        .iter()
        .map(|expense| monthly_equivalent(expense.amount, expense.frequency))
        .sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_expenses".to_string(),
        rule_name: "Monthly Expenses".to_string(),
        input: serde_json::json!({
            "expense_count": expenses.len()
        }),
        output: serde_json::json!({
            "expenses": lines,
            "monthly_total": monthly_total.normalize().to_string()
        }),
        reasoning: format!(
            "{} expense(s) normalised to ${} per month",
            expenses.len(),
            monthly_total.normalize()
        ),
    };

    MonthlyExpensesResult {
        monthly_total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_currency;
    use crate::error::BudgetError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_daily() {
        assert_eq!(monthly_equivalent(dec("30"), Frequency::Daily), dec("900"));
    }

    #[test]
    fn test_weekly() {
        assert_eq!(monthly_equivalent(dec("200"), Frequency::Weekly), dec("800"));
    }

    #[test]
    fn test_fortnightly() {
        assert_eq!(
            monthly_equivalent(dec("150.50"), Frequency::Fortnightly),
            dec("301")
        );
    }

    #[test]
    fn test_monthly_is_identity() {
        for amount in ["0", "1", "19.99", "123456.78", "-5"] {
            assert_eq!(monthly_equivalent(dec(amount), Frequency::Monthly), dec(amount));
        }
    }

    #[test]
    fn test_quarterly() {
        assert_eq!(monthly_equivalent(dec("300"), Frequency::Quarterly), dec("100"));
    }

    #[test]
    fn test_yearly_is_not_rounded() {
        let monthly = monthly_equivalent(dec("100"), Frequency::Yearly);
        assert_ne!(monthly, dec("8.33"));
        assert_eq!(round_currency(monthly), dec("8.33"));
    }

    #[test]
    fn test_tag_lookup() {
        assert_eq!(
            monthly_equivalent_for_tag(dec("10"), "weekly").unwrap(),
            dec("40")
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        match monthly_equivalent_for_tag(dec("10"), "unknown") {
            Err(BudgetError::UnknownFrequency { tag }) => assert_eq!(tag, "unknown"),
            other => panic!("Expected UnknownFrequency error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_expense_list_totals_zero() {
        let result = calculate_monthly_expenses(&[], 1);
        assert_eq!(result.monthly_total, Decimal::ZERO);
    }

    #[test]
    fn test_expense_total_and_audit() {
        let expenses = vec![
            ExpenseEntry::new("Groceries", dec("200"), Frequency::Weekly),
            ExpenseEntry::new("Insurance", dec("600"), Frequency::Quarterly),
        ];

        let result = calculate_monthly_expenses(&expenses, 5);

        assert_eq!(result.monthly_total, dec("1000"));
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.input["expense_count"], 2);
        assert_eq!(
            result.audit_step.output["expenses"][1]["monthly"]
                .as_str()
                .unwrap(),
            "200"
        );
        assert_eq!(
            result.audit_step.output["monthly_total"].as_str().unwrap(),
            "1000"
        );
    }
}
