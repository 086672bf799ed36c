//! Core data models for the budget engine.
//!
//! This module contains the typed budget input, the string-typed form it is
//! parsed from, the tax schedule, and the derived summary.

mod budget_form;
mod budget_input;
mod budget_summary;
mod frequency;
mod tax_schedule;

pub use budget_form::{BudgetForm, ExpenseForm};
pub use budget_input::{BudgetInputRecord, ExpenseEntry, MAX_AMOUNT};
pub use budget_summary::{AuditStep, AuditTrace, AuditWarning, BudgetSummary, SummaryCalculation};
pub use frequency::Frequency;
pub use tax_schedule::{TaxBracket, TaxSchedule};
