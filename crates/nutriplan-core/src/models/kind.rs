//! Plan kind enumeration.

use serde::{Deserialize, Serialize};

/// The two independent plan collections. Each kind carries its own
/// single-active-plan invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Meal and macro plans
    Diet,

    /// Exercise programs
    Workout,
}

impl PlanKind {
    /// All kinds, in a stable order.
    pub const ALL: [PlanKind; 2] = [PlanKind::Diet, PlanKind::Workout];

    /// Lowercase name used in messages and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Diet => "diet",
            PlanKind::Workout => "workout",
        }
    }

    /// Name of the table backing this kind.
    pub(crate) fn table(&self) -> &'static str {
        match self {
            PlanKind::Diet => "diet_plans",
            PlanKind::Workout => "workout_plans",
        }
    }
}
