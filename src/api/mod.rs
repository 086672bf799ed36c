//! HTTP API module for the budget engine.
//!
//! This module provides the REST endpoints that compute a budget summary
//! from a submitted form, persist it, and return the saved budget.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ExpenseRequest, FormValue};
pub use response::{ApiError, BudgetView};
pub use state::AppState;
