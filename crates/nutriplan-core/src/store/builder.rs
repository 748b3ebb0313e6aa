//! Builder for creating and configuring PlanStore instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use tokio::task;

use super::PlanStore;
use crate::{
    db::{Database, DEFAULT_BUSY_TIMEOUT},
    error::{Result, StoreError},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
    busy_timeout: Duration,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/nutriplan/plans.db` or
    /// `~/.local/share/nutriplan/plans.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how long an operation waits for a competing writer before
    /// failing with a retryable storage error.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Builds the configured store, creating the database and its schema if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `StoreError::StorageUnavailable` or `StoreError::Database` if
    /// database initialization fails
    pub async fn build(self) -> Result<PlanStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let busy_timeout = self.busy_timeout;
        task::spawn_blocking(move || {
            let _db = Database::with_busy_timeout(&db_path_clone, busy_timeout)?;
            Ok::<(), StoreError>(())
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Plan store ready at {}", db_path.display());

        Ok(PlanStore::new(db_path, self.busy_timeout))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("nutriplan")
            .place_data_file("plans.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlanStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
