//! Plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PlanKind;

/// A diet or workout plan owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Opaque unique identifier
    pub id: String,

    /// Collection the plan belongs to
    pub kind: PlanKind,

    /// User the plan belongs to
    pub owner_id: String,

    /// Human-readable label
    pub name: String,

    /// Plan body, stored and returned unmodified
    pub content: serde_json::Value,

    /// Whether the content came from the AI generator
    pub is_ai_generated: bool,

    /// Whether this is the owner's current plan of its kind
    pub is_active: bool,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}
