//! Identifier generation for new plan records.

use uuid::Uuid;

/// Returns a fresh opaque plan identifier (a random v4 UUID in hyphenated
/// lowercase form).
pub fn new_plan_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
