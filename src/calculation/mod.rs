//! Calculation logic for the budget engine.
//!
//! This module contains the pure functions that turn a budget input record
//! into monthly figures: progressive income tax on salary, weekly rent
//! annualised to a month, expense frequency normalisation, the aggregation
//! that combines them, and the discretionary figures shown from a summary.

mod budget_summary;
mod discretionary;
mod income_tax;
mod monthly_equivalent;
mod rental_income;
mod rounding;

pub use budget_summary::{
    compute_summary, compute_summary_from_form, compute_summary_with_schedule,
    compute_summary_with_trace,
};
pub use discretionary::{income_after_expenses, monthly_spend_available};
pub use income_tax::{
    MONTHS_PER_YEAR, SalaryTaxResult, TaxSlice, annual_income_tax, calculate_monthly_salary,
    monthly_salary_after_tax, tax_slices,
};
pub use monthly_equivalent::{
    DAYS_PER_MONTH, FORTNIGHTS_PER_MONTH, MONTHS_PER_QUARTER, MonthlyExpensesResult,
    WEEKS_PER_MONTH, calculate_monthly_expenses, monthly_equivalent, monthly_equivalent_for_tag,
};
pub use rental_income::{
    RentalIncomeResult, WEEKS_PER_YEAR, calculate_rental_income, monthly_rental_income,
};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
