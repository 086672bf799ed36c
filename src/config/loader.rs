//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax
//! schedule and application settings from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::models::TaxSchedule;

use super::types::{AppConfig, BudgetConfig, ServerConfig, StorageConfig, TaxScheduleConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── tax.yaml   # Tax schedule (required)
/// └── app.yaml   # Storage and server settings (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use fudget::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Tax schedule: {}", loader.tax_schedule().name());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BudgetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `tax.yaml` is missing or unparsable, if its
    /// brackets break a schedule invariant, or if `app.yaml` exists but
    /// cannot be parsed. A missing `app.yaml` yields default settings.
    pub fn load<P: AsRef<Path>>(path: P) -> BudgetResult<Self> {
        let path = path.as_ref();

        let tax_path = path.join("tax.yaml");
        let tax_config = Self::load_yaml::<TaxScheduleConfig>(&tax_path)?;
        let tax_schedule = TaxSchedule::new(tax_config.name, tax_config.brackets).map_err(|e| {
            BudgetError::ConfigParseError {
                path: tax_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let app_path = path.join("app.yaml");
        let app = if app_path.exists() {
            Self::load_yaml::<AppConfig>(&app_path)?
        } else {
            AppConfig::default()
        };

        Ok(Self {
            config: BudgetConfig::new(tax_schedule, app),
        })
    }

    /// Returns the configuration used when no directory is supplied: the
    /// built-in tax schedule and default settings.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BudgetResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BudgetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BudgetError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Returns the tax schedule.
    pub fn tax_schedule(&self) -> &TaxSchedule {
        self.config.tax_schedule()
    }

    /// Returns the storage settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.app().storage
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.app().server
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config"
    }

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.tax_schedule().name(), "Australian resident 2023-24");
        assert_eq!(loader.storage().key, "fudget");
        assert_eq!(loader.server().bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_shipped_schedule_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(
            loader.tax_schedule().brackets(),
            TaxSchedule::default().brackets()
        );
    }

    #[test]
    fn test_builtin_configuration() {
        let loader = ConfigLoader::builtin();
        assert_eq!(loader.tax_schedule(), &TaxSchedule::default());
        assert_eq!(loader.storage().data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(BudgetError::ConfigNotFound { path }) => assert!(path.contains("tax.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_app_yaml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tax.yaml", "name: flat\nbrackets:\n  - rate: \"0.1\"\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.tax_schedule().name(), "flat");
        assert_eq!(loader.storage(), &StorageConfig::default());
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tax.yaml", "name: [unclosed");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(BudgetError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_schedule_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "tax.yaml",
            "name: bad\nbrackets:\n  - threshold: \"100\"\n    rate: \"0.1\"\n",
        );

        match ConfigLoader::load(dir.path()) {
            Err(BudgetError::ConfigParseError { path, message }) => {
                assert!(path.contains("tax.yaml"));
                assert!(message.contains("unbounded"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_app_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tax.yaml", "name: flat\nbrackets:\n  - rate: \"0.1\"\n");
        write(&dir, "app.yaml", "storage:\n  key: household\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.storage().key, "household");
        assert_eq!(loader.storage().data_dir, PathBuf::from("./data"));
        assert_eq!(loader.server(), &ServerConfig::default());
    }
}
