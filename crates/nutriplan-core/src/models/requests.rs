//! Request types for plan operations.

use serde::{Deserialize, Serialize};

/// Partial update for a stored plan.
///
/// The ID, owner, kind, AI flag and creation time are immutable and have no
/// field here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    /// New name
    pub name: Option<String>,
    /// Replacement content
    pub content: Option<serde_json::Value>,
    /// Only `Some(false)` is accepted; activation goes through
    /// `activate_plan` so the sibling plans are deactivated with it
    pub is_active: Option<bool>,
}

impl UpdatePlanRequest {
    /// Whether the request carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.is_active.is_none()
    }

    /// Validates field values, returning the first offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(name) = &self.name {
            crate::params::validate_name(name)?;
        }
        if let Some(content) = &self.content {
            crate::params::validate_content(content)?;
        }
        if self.is_active == Some(true) {
            return Err(crate::StoreError::invalid_input("is_active").with_reason(
                "Plans can only be activated through the activate operation",
            ));
        }
        Ok(())
    }
}
