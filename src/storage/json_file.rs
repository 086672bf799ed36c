//! JSON file budget store with atomic writes.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetForm, BudgetSummary};

use super::{BudgetStore, StoredBudget};

/// A [`BudgetStore`] backed by one JSON file named after the storage key.
///
/// Writes go to a uniquely named temporary file that is renamed over the
/// real one, so a failed save leaves the previous budget intact. Loads and
/// saves through one store are serialised.
///
/// # Example
///
/// ```no_run
/// use fudget::storage::{BudgetStore, JsonFileStore};
///
/// let store = JsonFileStore::new("./data", "fudget");
/// let form = store.load_form()?;
/// # Ok::<(), fudget::error::BudgetError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store writing `<data_dir>/<key>.json`.
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", key)),
            lock: Mutex::new(()),
        }
    }

    /// Creates a store from storage settings.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir, &config.key)
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> BudgetResult<MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|_| BudgetError::Storage {
            message: format!("lock poisoned for {}", self.path.display()),
        })
    }
}

impl BudgetStore for JsonFileStore {
    fn load(&self) -> BudgetResult<Option<StoredBudget>> {
        let _guard = self.lock()?;
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path).map_err(|e| storage_error("open", &self.path, e))?;
        let reader = BufReader::new(file);
        let budget =
            serde_json::from_reader(reader).map_err(|e| storage_error("parse", &self.path, e))?;

        Ok(Some(budget))
    }

    fn save(&self, form: &BudgetForm, summary: &BudgetSummary) -> BudgetResult<()> {
        let budget = StoredBudget::new(form.clone(), summary.clone());
        let _guard = self.lock()?;
        write_json_atomic(&self.path, &budget)?;
        debug!(path = %self.path.display(), "Budget saved");
        Ok(())
    }
}

fn storage_error(action: &str, path: &Path, error: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage {
        message: format!("Failed to {} {}: {}", action, path.display(), error),
    }
}

/// Writes JSON to a temporary sibling file, then renames it over `path`.
fn write_json_atomic<T: serde::Serialize>(path: &Path, data: &T) -> BudgetResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = path.with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));

    let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize to", &temp_path, e))?;
    writer
        .flush()
        .map_err(|e| storage_error("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}
