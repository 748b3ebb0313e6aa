//! Plan summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanKind};

/// A plan without its content, for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Plan kind
    pub kind: PlanKind,
    /// Owning user
    pub owner_id: String,
    /// Plan name
    pub name: String,
    /// Whether the content came from the AI generator
    pub is_ai_generated: bool,
    /// Whether this is the owner's active plan
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            kind: plan.kind,
            owner_id: plan.owner_id.clone(),
            name: plan.name.clone(),
            is_ai_generated: plan.is_ai_generated,
            is_active: plan.is_active,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

impl From<Plan> for PlanSummary {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            kind: plan.kind,
            owner_id: plan.owner_id,
            name: plan.name,
            is_ai_generated: plan.is_ai_generated,
            is_active: plan.is_active,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
