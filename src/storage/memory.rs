//! In-memory budget store.

use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetForm, BudgetSummary};

use super::{BudgetStore, StoredBudget};

/// A [`BudgetStore`] that keeps the saved budget in process memory.
///
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    budget: RwLock<Option<StoredBudget>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `budget`.
    pub fn with_budget(budget: StoredBudget) -> Self {
        Self {
            budget: RwLock::new(Some(budget)),
        }
    }
}

fn poisoned() -> BudgetError {
    BudgetError::Storage {
        message: "budget store lock poisoned".to_string(),
    }
}

impl BudgetStore for MemoryStore {
    fn load(&self) -> BudgetResult<Option<StoredBudget>> {
        let budget = self.budget.read().map_err(|_| poisoned())?;
        Ok(budget.clone())
    }

    fn save(&self, form: &BudgetForm, summary: &BudgetSummary) -> BudgetResult<()> {
        let mut budget = self.budget.write().map_err(|_| poisoned())?;
        *budget = Some(StoredBudget::new(form.clone(), summary.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_summary(total: i64) -> BudgetSummary {
        BudgetSummary {
            monthly_salary_income: Decimal::new(total, 0),
            monthly_rental_income: Decimal::ZERO,
            total_monthly_income: Decimal::new(total, 0),
            target_monthly_savings: Decimal::ZERO,
            total_monthly_expenses: Decimal::ZERO,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        assert!(MemoryStore::new().load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let form = BudgetForm {
            yearly_salary: "12000".to_string(),
            ..BudgetForm::default()
        };

        store.save(&form, &create_summary(1000)).unwrap();

        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.form, form);
        assert_eq!(stored.summary, create_summary(1000));
    }

    #[test]
    fn test_save_overwrites_previous_budget() {
        let store = MemoryStore::new();
        store.save(&BudgetForm::default(), &create_summary(1)).unwrap();
        store.save(&BudgetForm::default(), &create_summary(2)).unwrap();

        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.summary.total_monthly_income, Decimal::new(2, 0));
    }

    #[test]
    fn test_store_can_start_with_a_budget() {
        let stored = StoredBudget::new(BudgetForm::default(), create_summary(7));
        let store = MemoryStore::with_budget(stored.clone());

        assert_eq!(store.load().unwrap(), Some(stored));
        assert_eq!(store.load_form().unwrap(), BudgetForm::default());
    }

    #[test]
    fn test_store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryStore>();
    }
}
