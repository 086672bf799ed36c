//! Persistence of submitted budgets.
//!
//! The engine itself never touches storage. Callers depend on a
//! [`BudgetStore`], load the previous form from it, and save the form
//! together with its freshly computed summary after each submission.

mod json_file;
mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;
use crate::models::{BudgetForm, BudgetSummary};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The persisted budget: the form as submitted and the summary computed
/// from it, stored as one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBudget {
    /// The submitted form values.
    #[serde(flatten)]
    pub form: BudgetForm,
    /// The summary computed from `form`.
    #[serde(flatten)]
    pub summary: BudgetSummary,
    /// When the budget was saved.
    pub saved_at: DateTime<Utc>,
}

impl StoredBudget {
    /// Creates a snapshot stamped with the current time.
    pub fn new(form: BudgetForm, summary: BudgetSummary) -> Self {
        Self {
            form,
            summary,
            saved_at: Utc::now(),
        }
    }
}

/// A repository holding at most one saved budget.
///
/// Every save replaces the previous budget in full.
pub trait BudgetStore: Send + Sync {
    /// Returns the saved budget, if one exists.
    fn load(&self) -> BudgetResult<Option<StoredBudget>>;

    /// Replaces the saved budget with `form` and `summary`.
    fn save(&self, form: &BudgetForm, summary: &BudgetSummary) -> BudgetResult<()>;

    /// Returns the saved form, or the default form when nothing is saved.
    fn load_form(&self) -> BudgetResult<BudgetForm> {
        Ok(self.load()?.map(|stored| stored.form).unwrap_or_default())
    }
}
