//! Async plan store API.
//!
//! [`PlanStore`] is the entry point the rest of the application talks to. It
//! owns no connection; every operation opens one on tokio's blocking pool,
//! runs to completion and closes it, so callers can treat each call as an
//! independent, possibly suspending request.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers) │───▶│   (plan_ops)    │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers     Params → queries        SQLite tables
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use nutriplan_core::{
//!     models::PlanKind,
//!     params::{CreatePlan, ListPlans, PlanRef},
//!     PlanStoreBuilder,
//! };
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanStoreBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()
//!     .await?;
//!
//! let plan = store
//!     .create_plan(&CreatePlan {
//!         kind: PlanKind::Diet,
//!         owner_id: "u1".to_string(),
//!         name: "High protein".to_string(),
//!         content: json!({ "meals": ["eggs", "chicken"] }),
//!         is_ai_generated: false,
//!     })
//!     .await?;
//!
//! store.activate_plan(&PlanRef::new(PlanKind::Diet, &plan.id)).await?;
//!
//! let plans = store.list_plans(&ListPlans::all(PlanKind::Diet, "u1")).await?;
//! assert_eq!(plans.iter().filter(|p| p.is_active).count(), 1);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StoreError},
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::PlanStoreBuilder;

/// Main interface for managing diet and workout plans.
#[derive(Debug, Clone)]
pub struct PlanStore {
    pub(crate) db_path: PathBuf,
    pub(crate) busy_timeout: Duration,
}

impl PlanStore {
    /// Creates a store over an initialized database file.
    pub(crate) fn new(db_path: PathBuf, busy_timeout: Duration) -> Self {
        Self {
            db_path,
            busy_timeout,
        }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let busy_timeout = self.busy_timeout;

        task::spawn_blocking(move || {
            let mut db = Database::connect(&db_path, busy_timeout)?;
            f(&mut db)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
