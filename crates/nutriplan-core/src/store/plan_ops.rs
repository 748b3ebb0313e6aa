//! Plan operations for the PlanStore.

use super::PlanStore;
use crate::{
    error::{Result, StoreError},
    models::{Plan, PlanFilter, UpdatePlanRequest},
    params::{validate_owner, CreatePlan, ListPlans, OwnerScope, PlanRef, UpdatePlan},
};

impl PlanStore {
    /// Creates a new, inactive plan. The plan is visible to `list_plans` as
    /// soon as this returns.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;
        let params = params.clone();

        self.with_database(move |db| {
            db.create_plan(
                params.kind,
                &params.owner_id,
                &params.name,
                &params.content,
                params.is_ai_generated,
            )
        })
        .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &PlanRef) -> Result<Option<Plan>> {
        let PlanRef { kind, id } = params.clone();

        self.with_database(move |db| db.get_plan(kind, &id)).await
    }

    /// Lists an owner's plans of one kind in creation order.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<Plan>> {
        params.validate()?;
        let filter = PlanFilter::from(params);
        let kind = params.kind;
        let owner_id = params.owner_id.clone();

        self.with_database(move |db| {
            let filter = (!filter.is_empty()).then_some(&filter);
            db.list_plans(kind, &owner_id, filter)
        })
        .await
    }

    /// Returns the owner's active plan of the given kind, if any.
    pub async fn active_plan(&self, params: &OwnerScope) -> Result<Option<Plan>> {
        params.validate()?;
        let OwnerScope { kind, owner_id } = params.clone();

        self.with_database(move |db| db.get_active_plan(kind, &owner_id))
            .await
    }

    /// Makes the plan its owner's only active plan of its kind.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PlanNotFound` if no such plan exists; no other
    /// plan is touched in that case.
    pub async fn activate_plan(&self, params: &PlanRef) -> Result<Plan> {
        let PlanRef { kind, id } = params.clone();

        self.with_database(move |db| db.activate_plan(kind, &id))
            .await
    }

    /// Applies a partial update to a plan.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Plan> {
        let (PlanRef { kind, id }, request) = params.clone().into_request()?;

        self.with_database(move |db| db.update_plan(kind, &id, &request))
            .await
    }

    /// Clears the active flag on a plan, leaving its owner with no active
    /// plan of that kind. A no-op for plans that are already inactive.
    pub async fn deactivate_plan(&self, params: &PlanRef) -> Result<Plan> {
        let PlanRef { kind, id } = params.clone();
        let request = UpdatePlanRequest {
            is_active: Some(false),
            ..Default::default()
        };

        self.with_database(move |db| db.update_plan(kind, &id, &request))
            .await
    }

    /// Permanently deletes a plan, returning the removed record.
    pub async fn delete_plan(&self, params: &PlanRef) -> Result<Plan> {
        let PlanRef { kind, id } = params.clone();

        self.with_database(move |db| db.delete_plan(kind, &id))
            .await
    }

    /// Retrieves a plan, treating absence as an error.
    pub async fn require_plan(&self, params: &PlanRef) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or_else(|| StoreError::not_found(params.kind, &params.id))
    }

    /// Retrieves a plan on behalf of `owner_id`.
    ///
    /// A plan belonging to someone else is reported as `PlanNotFound`, the
    /// same as a missing one, so IDs cannot be discovered across owners.
    pub async fn require_owned_plan(&self, params: &PlanRef, owner_id: &str) -> Result<Plan> {
        validate_owner(owner_id)?;

        let plan = self.require_plan(params).await?;
        if plan.owner_id != owner_id {
            return Err(StoreError::not_found(params.kind, &params.id));
        }
        Ok(plan)
    }
}
