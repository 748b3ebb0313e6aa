//! Parameter structures for plan store operations
//!
//! These structures are shared by every interface that drives the store (the
//! CLI today, an HTTP layer in the surrounding application) and carry no
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   PlanStore     │
//! │  (clap derives) │───▶│ (serde only)    │───▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Each parameter type that accepts user input exposes a `validate` method;
//! the store calls it before touching the database so malformed requests fail
//! with [`StoreError::InvalidInput`](crate::StoreError::InvalidInput).

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StoreError},
    models::{PlanKind, UpdatePlanRequest},
};

/// Identifies a single plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRef {
    /// Collection the plan lives in
    pub kind: PlanKind,
    /// The ID of the plan
    pub id: String,
}

impl PlanRef {
    /// Convenience constructor.
    pub fn new(kind: PlanKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Identifies one owner's collection of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerScope {
    /// Plan kind
    pub kind: PlanKind,
    /// Owning user
    pub owner_id: String,
}

impl OwnerScope {
    /// Convenience constructor.
    pub fn new(kind: PlanKind, owner_id: impl Into<String>) -> Self {
        Self {
            kind,
            owner_id: owner_id.into(),
        }
    }

    /// Validate the owner ID.
    pub fn validate(&self) -> Result<()> {
        validate_owner(&self.owner_id)
    }
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Collection to create the plan in
    pub kind: PlanKind,
    /// Owning user, supplied by the authentication layer
    pub owner_id: String,
    /// Human-readable name (required)
    pub name: String,
    /// Plan body; any JSON value except `null`
    pub content: serde_json::Value,
    /// Whether the content came from the AI generator
    #[serde(default)]
    pub is_ai_generated: bool,
}

impl CreatePlan {
    /// Validate owner, name and content.
    ///
    /// ```rust
    /// use nutriplan_core::{models::PlanKind, params::CreatePlan};
    /// use serde_json::json;
    ///
    /// let params = CreatePlan {
    ///     kind: PlanKind::Diet,
    ///     owner_id: "u1".to_string(),
    ///     name: "   ".to_string(),
    ///     content: json!({}),
    ///     is_ai_generated: false,
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_owner(&self.owner_id)?;
        validate_name(&self.name)?;
        validate_content(&self.content)
    }
}

/// Parameters for listing an owner's plans of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlans {
    /// Plan kind
    pub kind: PlanKind,
    /// Owning user
    pub owner_id: String,
    /// Only return the active plan
    #[serde(default)]
    pub active_only: bool,
    /// Restrict by AI flag
    #[serde(default)]
    pub ai_generated: Option<bool>,
}

impl ListPlans {
    /// List every plan of `kind` owned by `owner_id`.
    pub fn all(kind: PlanKind, owner_id: impl Into<String>) -> Self {
        Self {
            kind,
            owner_id: owner_id.into(),
            active_only: false,
            ai_generated: None,
        }
    }

    /// Validate the owner ID.
    pub fn validate(&self) -> Result<()> {
        validate_owner(&self.owner_id)
    }
}

/// Parameters for a partial plan update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// Plan kind
    pub kind: PlanKind,
    /// Plan ID
    pub id: String,
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    /// `Some(false)` deactivates the plan; `Some(true)` is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdatePlan {
    /// Split into the target reference and the database-level request,
    /// validating the changes on the way.
    pub fn into_request(self) -> Result<(PlanRef, UpdatePlanRequest)> {
        let request = UpdatePlanRequest {
            name: self.name,
            content: self.content,
            is_active: self.is_active,
        };
        request.validate()?;
        Ok((PlanRef::new(self.kind, self.id), request))
    }
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePlan {
    /// Plan kind
    pub kind: PlanKind,
    /// Plan ID
    pub id: String,
    /// Explicit confirmation, required to proceed
    #[serde(default)]
    pub confirmed: bool,
}

pub(crate) fn validate_owner(owner_id: &str) -> Result<()> {
    if owner_id.trim().is_empty() {
        return Err(StoreError::invalid_input("owner_id").with_reason("Owner ID must not be empty"));
    }
    Ok(())
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid_input("name").with_reason("Plan name must not be empty"));
    }
    Ok(())
}

pub(crate) fn validate_content(content: &serde_json::Value) -> Result<()> {
    if content.is_null() {
        return Err(StoreError::invalid_input("content").with_reason("Plan content is required"));
    }
    Ok(())
}
