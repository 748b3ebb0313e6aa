//! Plan handler operations that return formatted wrapper types.

use super::PlanStore;
use crate::{
    display::{ActivateResult, CreateResult, DeleteResult, PlanSummaries, UpdateResult},
    error::{Result, StoreError},
    models::{Plan, PlanSummary},
    params::{CreatePlan, DeletePlan, ListPlans, PlanRef, UpdatePlan},
};

impl PlanStore {
    /// Handle listing plans as summaries (content omitted).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use nutriplan_core::{models::PlanKind, params::ListPlans, PlanStoreBuilder};
    /// # async {
    /// let store = PlanStoreBuilder::new().build().await?;
    /// let summaries = store
    ///     .list_plans_summary(&ListPlans::all(PlanKind::Workout, "u1"))
    ///     .await?;
    /// println!("{summaries}");
    /// # Result::<(), nutriplan_core::StoreError>::Ok(())
    /// # };
    /// ```
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let plans = self.list_plans(params).await?;
        let summaries: Vec<PlanSummary> = plans.into_iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing a single plan, failing with `PlanNotFound` if absent.
    pub async fn show_plan(&self, params: &PlanRef) -> Result<Plan> {
        self.require_plan(params).await
    }

    /// Handle creating a new plan.
    pub async fn create_plan_result(&self, params: &CreatePlan) -> Result<CreateResult<Plan>> {
        let plan = self.create_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle activating a plan, reporting which plan it replaced.
    ///
    /// The replaced plan is read inside the activation transaction, so it is
    /// accurate even when activations race.
    pub async fn activate_plan_result(&self, params: &PlanRef) -> Result<ActivateResult> {
        let PlanRef { kind, id } = params.clone();

        let (plan, previous_id) = self
            .with_database(move |db| db.switch_active_plan(kind, &id))
            .await?;
        Ok(ActivateResult { plan, previous_id })
    }

    /// Handle updating a plan, listing the fields that changed.
    pub async fn update_plan_result(&self, params: &UpdatePlan) -> Result<UpdateResult<Plan>> {
        let before = self
            .require_plan(&PlanRef::new(params.kind, &params.id))
            .await?;
        let after = self.update_plan(params).await?;

        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Renamed from '{}' to '{}'", before.name, after.name));
        }
        if before.content != after.content {
            changes.push("Replaced plan content".to_string());
        }
        if before.is_active && !after.is_active {
            changes.push("Deactivated plan".to_string());
        }

        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if `confirmed` is false
    /// Returns `StoreError::PlanNotFound` if the plan does not exist
    pub async fn delete_plan_confirmed(&self, params: &DeletePlan) -> Result<DeleteResult<Plan>> {
        if !params.confirmed {
            return Err(StoreError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let plan = self
            .delete_plan(&PlanRef::new(params.kind, &params.id))
            .await?;
        Ok(DeleteResult::new(plan))
    }
}
