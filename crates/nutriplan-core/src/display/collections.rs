//! Collection wrapper types for displaying groups of plans.

use std::{fmt, ops::Index};

use crate::models::PlanSummary;

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Titles are left to the caller; an empty collection renders as a single
/// "No plans found." line.
///
/// # Examples
///
/// ```rust
/// use nutriplan_core::{
///     display::PlanSummaries,
///     models::{PlanKind, PlanSummary},
/// };
/// use jiff::Timestamp;
///
/// let summary = PlanSummary {
///     id: "p1".to_string(),
///     kind: PlanKind::Diet,
///     owner_id: "u1".to_string(),
///     name: "Mediterranean".to_string(),
///     is_ai_generated: true,
///     is_active: true,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = PlanSummaries(vec![summary]).to_string();
/// assert!(output.contains("Mediterranean"));
/// assert!(output.contains("★ Active"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }

    /// The active plan, if the collection contains one.
    pub fn active(&self) -> Option<&PlanSummary> {
        self.0.iter().find(|plan| plan.is_active)
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}
