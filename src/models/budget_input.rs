//! Typed budget input: the record every calculation reads from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::Frequency;

/// Largest magnitude accepted for any amount or percentage: one quadrillion.
///
/// Within this bound every step of a summary stays inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A single recurring expense.
///
/// # Example
///
/// ```
/// use fudget::models::{ExpenseEntry, Frequency};
/// use rust_decimal::Decimal;
///
/// let rent = ExpenseEntry::new("Rent", Decimal::new(450, 0), Frequency::Weekly);
/// assert_eq!(rent.frequency, Frequency::Weekly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Free-text label; may be empty.
    #[serde(default)]
    pub name: String,
    /// The amount paid each period.
    pub amount: Decimal,
    /// How often the amount is paid.
    pub frequency: Frequency,
}

impl ExpenseEntry {
    /// Creates an expense entry.
    pub fn new(name: impl Into<String>, amount: Decimal, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
        }
    }
}

/// Everything the aggregator needs to build a [`super::BudgetSummary`].
///
/// `savings_target_percent` is expected to fall within `[0, 100]` but is not
/// enforced; values outside that range only produce an audit warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInputRecord {
    /// Gross yearly salary before tax.
    pub yearly_salary: Decimal,
    /// Rental income received each week.
    pub weekly_rental: Decimal,
    /// Share of total monthly income to set aside, as a percentage.
    pub savings_target_percent: Decimal,
    /// Recurring expenses in the order the user entered them.
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

impl BudgetInputRecord {
    /// Checks that every amount lies within `[-MAX_AMOUNT, MAX_AMOUNT]`.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::AmountOutOfRange`] for the first field outside
    /// the bound, named the way the form names it.
    pub fn check_amounts(&self) -> BudgetResult<()> {
        check_amount("yearly_salary", self.yearly_salary)?;
        check_amount("weekly_rental", self.weekly_rental)?;
        check_amount("savings_target", self.savings_target_percent)?;
        for (index, expense) in self.expenses.iter().enumerate() {
            check_amount(&format!("expenses[{}].amount", index), expense.amount)?;
        }
        Ok(())
    }
}

fn check_amount(field: &str, value: Decimal) -> BudgetResult<()> {
    if value.abs() > MAX_AMOUNT {
        return Err(BudgetError::AmountOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_input_record() {
        let json = r#"{
            "yearly_salary": "90000",
            "weekly_rental": "500",
            "savings_target_percent": "20",
            "expenses": [
                { "name": "Groceries", "amount": "200", "frequency": "weekly" }
            ]
        }"#;

        let record: BudgetInputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.yearly_salary, dec("90000"));
        assert_eq!(record.weekly_rental, dec("500"));
        assert_eq!(record.savings_target_percent, dec("20"));
        assert_eq!(record.expenses.len(), 1);
        assert_eq!(record.expenses[0].frequency, Frequency::Weekly);
    }

    #[test]
    fn test_expenses_default_to_empty() {
        let json = r#"{
            "yearly_salary": "0",
            "weekly_rental": "0",
            "savings_target_percent": "0"
        }"#;

        let record: BudgetInputRecord = serde_json::from_str(json).unwrap();
        assert!(record.expenses.is_empty());
    }

    #[test]
    fn test_max_amount_is_one_quadrillion() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));
    }

    #[test]
    fn test_amounts_at_the_bound_are_accepted() {
        let record = BudgetInputRecord {
            yearly_salary: MAX_AMOUNT,
            weekly_rental: -MAX_AMOUNT,
            savings_target_percent: MAX_AMOUNT,
            expenses: vec![ExpenseEntry::new("Big", MAX_AMOUNT, Frequency::Daily)],
        };
        assert!(record.check_amounts().is_ok());
    }

    #[test]
    fn test_oversized_expense_is_named() {
        let record = BudgetInputRecord {
            expenses: vec![
                ExpenseEntry::new("Coffee", dec("5"), Frequency::Daily),
                ExpenseEntry::new("Yacht", dec("7000000000000000000000000000"), Frequency::Daily),
            ],
            ..BudgetInputRecord::default()
        };

        match record.check_amounts() {
            Err(BudgetError::AmountOutOfRange { field, value }) => {
                assert_eq!(field, "expenses[1].amount");
                assert_eq!(value, dec("7000000000000000000000000000"));
            }
            other => panic!("Expected AmountOutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_negative_rent_is_rejected() {
        let record = BudgetInputRecord {
            weekly_rental: dec("-1000000000000000.01"),
            ..BudgetInputRecord::default()
        };
        assert!(matches!(
            record.check_amounts(),
            Err(BudgetError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_expense_name_may_be_omitted() {
        let json = r#"{ "amount": "12.50", "frequency": "daily" }"#;

        let expense: ExpenseEntry = serde_json::from_str(json).unwrap();
        assert_eq!(expense.name, "");
        assert_eq!(expense.amount, dec("12.50"));
    }
}
