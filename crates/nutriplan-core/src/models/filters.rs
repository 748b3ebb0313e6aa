//! Filter types for querying plans.

/// Filter options for listing an owner's plans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFilter {
    /// Only return the active plan
    pub active_only: bool,

    /// Restrict to AI-generated (`Some(true)`) or user-authored
    /// (`Some(false)`) plans
    pub ai_generated: Option<bool>,
}

impl PlanFilter {
    /// Filter that keeps only the active plan.
    ///
    /// ```rust
    /// use nutriplan_core::models::PlanFilter;
    ///
    /// let filter = PlanFilter::active();
    /// assert!(filter.active_only);
    /// assert_eq!(filter.ai_generated, None);
    /// ```
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Default::default()
        }
    }

    /// Whether the filter restricts anything at all.
    pub fn is_empty(&self) -> bool {
        !self.active_only && self.ai_generated.is_none()
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            active_only: params.active_only,
            ai_generated: params.ai_generated,
        }
    }
}
