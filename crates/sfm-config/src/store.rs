//! File storage for common values
//!
//! Loading and saving are best-effort: the editors keep working with empty
//! lists when the file is missing or unreadable, and a failed save is only
//! logged.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::common::CommonValues;
use crate::error::{ConfigError, ConfigResult};

/// File name of the common-value store inside its directory
pub const STORE_FILE_NAME: &str = "common_values.json";

/// Common-value store backed by `<dir>/common_values.json`
#[derive(Debug, Clone)]
pub struct CommonValuesStore {
    path: PathBuf,
}

impl CommonValuesStore {
    /// Create a store for the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORE_FILE_NAME),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the lists, falling back to empty lists on any failure
    pub fn load(&self) -> CommonValues {
        match self.try_load() {
            Ok(values) => values,
            Err(e) => {
                warn!("Using empty common values: {}", e);
                CommonValues::default()
            }
        }
    }

    /// Save the lists, logging any failure
    pub fn save(&self, values: &CommonValues) {
        if let Err(e) = self.try_save(values) {
            warn!("Failed to save common values: {}", e);
        }
    }

    /// Load the lists; a missing file yields empty lists
    pub fn try_load(&self) -> ConfigResult<CommonValues> {
        if !self.path.exists() {
            debug!("No common values at {:?}, using empty lists", self.path);
            return Ok(CommonValues::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        let values: CommonValues =
            serde_json::from_str(&content).map_err(|e| ConfigError::Json {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(
            "Loaded common values from {:?} ({} labels)",
            self.path,
            values.labels.len()
        );
        Ok(values)
    }

    /// Save the lists, writing to a temp file first and renaming it
    pub fn try_save(&self, values: &CommonValues) -> ConfigResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
            }
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| ConfigError::Json {
            path: self.path.clone(),
            source: e,
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).map_err(|e| write_error(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| write_error(&self.path, e))?;

        debug!("Saved common values to {:?}", self.path);
        Ok(())
    }
}

fn write_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    }
}
