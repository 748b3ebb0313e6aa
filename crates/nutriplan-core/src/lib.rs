//! Core library for the NutriPlan plan store.
//!
//! This crate persists diet and workout plans owned by users and enforces
//! that each owner has at most one active plan per kind. Activation
//! deactivates the owner's other plans of the same kind and activates the
//! target inside a single SQLite transaction, so the invariant holds for
//! every reader and under concurrent activations.
//!
//! # Layers
//!
//! - [`db`]: SQLite schema and queries, one table per [`PlanKind`]
//! - [`store`]: the async [`PlanStore`] API and its builder
//! - [`params`]: interface-neutral request types with validation
//! - [`display`]: markdown formatting for plans and operation results
//! - [`error`]: the [`StoreError`] taxonomy
//!
//! # Quick Start
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
//!         kind: PlanKind::Workout,
//!         owner_id: "u1".to_string(),
//!         name: "Full body".to_string(),
//!         content: json!({ "days": [{ "day": "Monday", "exercises": ["Squat"] }] }),
//!         is_ai_generated: true,
//!     })
//!     .await?;
//!
//! let activated = store
//!     .activate_plan(&PlanRef::new(PlanKind::Workout, &plan.id))
//!     .await?;
//! assert!(activated.is_active);
//!
//! let summaries = store
//!     .list_plans_summary(&ListPlans::all(PlanKind::Workout, "u1"))
//!     .await?;
//! println!("{summaries}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ActivateResult, CreateResult, DeleteResult, OperationStatus, PlanSummaries, UpdateResult,
};
pub use error::{ErrorKind, Result, StoreError};
pub use models::{Plan, PlanFilter, PlanKind, PlanSummary, UpdatePlanRequest};
pub use params::{CreatePlan, DeletePlan, ListPlans, OwnerScope, PlanRef, UpdatePlan};
pub use store::{PlanStore, PlanStoreBuilder};
