//! Configuration loading and management for the budget engine.
//!
//! This module loads the tax schedule and application settings from YAML
//! files, falling back to a built-in configuration.
//!
//! # Example
//!
//! ```no_run
//! use fudget::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded schedule: {}", config.tax_schedule().name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, BudgetConfig, DEFAULT_STORAGE_KEY, ServerConfig, StorageConfig, TaxScheduleConfig,
};
