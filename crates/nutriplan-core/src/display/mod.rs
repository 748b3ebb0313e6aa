//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context for collections and for the outcome of
//! create, update, activate and delete operations. Everything renders as
//! markdown so the CLI can print it through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result and List │    │   Formatted     │
//! │ (Plan, Summary) │───▶│    Wrappers     │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use nutriplan_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Plan, PlanKind},
//! };
//! use jiff::Timestamp;
//! use serde_json::json;
//!
//! let plan = Plan {
//!     id: "p1".to_string(),
//!     kind: PlanKind::Workout,
//!     owner_id: "u1".to_string(),
//!     name: "5x5".to_string(),
//!     content: json!({ "days": [] }),
//!     is_ai_generated: false,
//!     is_active: false,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Created workout plan with ID: p1"));
//!
//! let status = OperationStatus::success("Plan deactivated".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use results::{ActivateResult, CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
