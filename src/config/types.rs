//! Configuration types for the budget engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{TaxBracket, TaxSchedule};

/// Default logical key budget state is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "fudget";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Tax schedule file structure (`tax.yaml`).
///
/// The brackets are validated when the file is loaded, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxScheduleConfig {
    /// Display name of the schedule.
    pub name: String,
    /// Brackets in ascending threshold order.
    pub brackets: Vec<TaxBracket>,
}

/// Where budget state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// The single logical key the budget is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Directory holding the persisted JSON file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            data_dir: default_data_dir(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Application settings file structure (`app.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    tax_schedule: TaxSchedule,
    app: AppConfig,
}

impl BudgetConfig {
    /// Creates a new BudgetConfig from its component parts.
    pub fn new(tax_schedule: TaxSchedule, app: AppConfig) -> Self {
        Self { tax_schedule, app }
    }

    /// Returns the tax schedule salaries are taxed against.
    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax_schedule
    }

    /// Returns the application settings.
    pub fn app(&self) -> &AppConfig {
        &self.app
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new(TaxSchedule::default(), AppConfig::default())
    }
}
