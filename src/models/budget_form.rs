//! String-typed form values and their conversion to a [`BudgetInputRecord`].
//!
//! Forms hold exactly what the user typed. Nothing here is trusted until
//! [`BudgetForm::to_record`] has parsed every number and frequency tag.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::{BudgetInputRecord, ExpenseEntry, Frequency};

fn zero() -> String {
    "0".to_string()
}

fn default_frequency() -> String {
    Frequency::default().as_str().to_string()
}

/// The budget form as submitted, every numeric field still a string.
///
/// The default form is what a first-time user sees: zero salary, zero
/// rental, a zero savings target and no expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetForm {
    /// Gross yearly salary.
    #[serde(default = "zero")]
    pub yearly_salary: String,
    /// Weekly rental income.
    #[serde(default = "zero")]
    pub weekly_rental: String,
    /// Savings target as a percentage of monthly income.
    #[serde(default = "zero")]
    pub savings_target: String,
    /// Expense rows.
    #[serde(default)]
    pub expenses: Vec<ExpenseForm>,
}

impl Default for BudgetForm {
    fn default() -> Self {
        Self {
            yearly_salary: zero(),
            weekly_rental: zero(),
            savings_target: zero(),
            expenses: Vec::new(),
        }
    }
}

/// One expense row as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// Free-text label.
    #[serde(default)]
    pub name: String,
    /// Amount per period.
    #[serde(default)]
    pub amount: String,
    /// Frequency tag, e.g. "weekly".
    #[serde(default = "default_frequency")]
    pub frequency: String,
}

impl Default for ExpenseForm {
    /// A freshly added row: no name, no amount, paid monthly.
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            frequency: default_frequency(),
        }
    }
}

impl BudgetForm {
    /// Appends a blank expense row.
    pub fn add_expense(&mut self) -> &mut ExpenseForm {
        self.expenses.push(ExpenseForm::default());
        let last = self.expenses.len() - 1;
        &mut self.expenses[last]
    }

    /// Removes the expense row at `index`, returning it if it existed.
    pub fn remove_expense(&mut self, index: usize) -> Option<ExpenseForm> {
        (index < self.expenses.len()).then(|| self.expenses.remove(index))
    }

    /// Parses the form into a typed record.
    ///
    /// Any malformed number fails with [`BudgetError::InvalidNumber`] naming
    /// the offending field; any unrecognised frequency fails with
    /// [`BudgetError::UnknownFrequency`]. Amounts beyond
    /// [`super::MAX_AMOUNT`] fail with [`BudgetError::AmountOutOfRange`].
    /// No partial record is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use fudget::models::{BudgetForm, ExpenseForm};
    /// use rust_decimal::Decimal;
    ///
    /// let form = BudgetForm {
    ///     yearly_salary: "90000".to_string(),
    ///     weekly_rental: "500".to_string(),
    ///     savings_target: "20".to_string(),
    ///     expenses: vec![ExpenseForm {
    ///         name: "Groceries".to_string(),
    ///         amount: "200".to_string(),
    ///         frequency: "weekly".to_string(),
    ///     }],
    /// };
    ///
    /// let record = form.to_record().unwrap();
    /// assert_eq!(record.yearly_salary, Decimal::new(90000, 0));
    /// ```
    pub fn to_record(&self) -> BudgetResult<BudgetInputRecord> {
        let expenses = self
            .expenses
            .iter()
            .enumerate()
            .map(|(index, expense)| expense.to_entry(index))
            .collect::<BudgetResult<Vec<_>>>()?;

        let record = BudgetInputRecord {
            yearly_salary: parse_amount("yearly_salary", &self.yearly_salary)?,
            weekly_rental: parse_amount("weekly_rental", &self.weekly_rental)?,
            savings_target_percent: parse_amount("savings_target", &self.savings_target)?,
            expenses,
        };
        record.check_amounts()?;
        Ok(record)
    }
}

impl ExpenseForm {
    fn to_entry(&self, index: usize) -> BudgetResult<ExpenseEntry> {
        let amount = parse_amount(&format!("expenses[{}].amount", index), &self.amount)?;
        let frequency = Frequency::from_str(&self.frequency)?;
        Ok(ExpenseEntry::new(self.name.clone(), amount, frequency))
    }
}

impl From<&BudgetInputRecord> for BudgetForm {
    fn from(record: &BudgetInputRecord) -> Self {
        Self {
            yearly_salary: record.yearly_salary.to_string(),
            weekly_rental: record.weekly_rental.to_string(),
            savings_target: record.savings_target_percent.to_string(),
            expenses: record
                .expenses
                .iter()
                .map(|expense| ExpenseForm {
                    name: expense.name.clone(),
                    amount: expense.amount.to_string(),
                    frequency: expense.frequency.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Parses plain decimal notation, falling back to exponent notation (`1e-7`).
fn parse_amount(field: &str, raw: &str) -> BudgetResult<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BudgetError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
