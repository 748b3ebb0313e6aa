//! Data models for diet and workout plans.
//!
//! Both plan kinds share one record shape ([`Plan`]); the [`PlanKind`]
//! selects which collection a record lives in. Display implementations are
//! located in [`crate::display::models`] to keep data structures separate
//! from presentation.
//!
//! # Examples
//!
//! ```rust
//! use nutriplan_core::models::{Plan, PlanKind};
//! use jiff::Timestamp;
//! use serde_json::json;
//!
//! let plan = Plan {
//!     id: "0d9c1a2e-3d8b-4f7e-9a51-2f0e6c4b7a10".to_string(),
//!     kind: PlanKind::Diet,
//!     owner_id: "u1".to_string(),
//!     name: "Cutting phase".to_string(),
//!     content: json!({ "days": [] }),
//!     is_ai_generated: true,
//!     is_active: false,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//! println!("{}", plan); // Markdown with header, metadata and content
//! ```

pub mod filters;
pub mod kind;
pub mod plan;
pub mod requests;
pub mod summary;


pub use filters::PlanFilter;
pub use kind::PlanKind;
pub use plan::Plan;
pub use requests::UpdatePlanRequest;
pub use summary::PlanSummary;
