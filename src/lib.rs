//! Fudget Budget Engine
//!
//! This crate turns a user's income sources and recurring expenses into a
//! monthly budget summary: progressive income tax on salary, weekly rental
//! income annualised to a monthly figure, expenses normalised from any
//! recurring frequency, and a savings target derived from total income.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
