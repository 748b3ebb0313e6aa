//! Display implementations for domain models.
//!
//! All output is markdown: a header per plan, a metadata list and the plan
//! content as a pretty-printed JSON block.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanKind, PlanSummary};

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn status_label(is_active: bool) -> &'static str {
    if is_active {
        "★ Active"
    } else {
        "○ Inactive"
    }
}

fn source_label(is_ai_generated: bool) -> &'static str {
    if is_ai_generated {
        "AI-generated"
    } else {
        "Custom"
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Kind: {}", self.kind)?;
        writeln!(f, "- Status: {}", status_label(self.is_active))?;
        writeln!(f, "- Source: {}", source_label(self.is_ai_generated))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Content")?;
        writeln!(f)?;
        let pretty = serde_json::to_string_pretty(&self.content).map_err(|_| fmt::Error)?;
        writeln!(f, "```json")?;
        writeln!(f, "{pretty}")?;
        writeln!(f, "```")
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Status: {} ({})",
            status_label(self.is_active),
            source_label(self.is_ai_generated)
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}
