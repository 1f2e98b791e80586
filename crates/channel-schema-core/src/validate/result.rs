// crates/channel-schema-core/src/validate/result.rs
// ============================================================================
// Module: Validation Result Model
// Description: Structured validation failure entries shared by all pipelines.
// Purpose: Carry one human-readable message plus the member names it concerns.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every validation entry point returns `Vec<ValidationError>`; the empty
//! vector is the sole success signal. A failure entry pairs one message with
//! the ordered, deduplicated member names it concerns, so callers can route
//! errors back to the offending configuration key or message field. Rule
//! violations are values, never panics, and pipelines accumulate them to
//! completion rather than aborting on the first failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::schema::identifiers::names_equal;

// ============================================================================
// SECTION: Validation Error
// ============================================================================

/// One validation rule violation.
///
/// # Invariants
/// - `members` preserves insertion order and never holds two names equal
///   under ASCII case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the violation.
    pub message: String,
    /// Member names the violation concerns, in insertion order.
    #[serde(default)]
    pub members: Vec<String>,
}

impl ValidationError {
    /// Creates a violation with no associated member names.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            members: Vec::new(),
        }
    }

    /// Creates a violation concerning one member.
    #[must_use]
    pub fn for_member(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message).with_member(member)
    }

    /// Adds a member name, keeping the list deduplicated under case folding.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        let member = member.into();
        if !self.concerns(&member) {
            self.members.push(member);
        }
        self
    }

    /// Returns true when the violation concerns the named member.
    #[must_use]
    pub fn concerns(&self, member: &str) -> bool {
        self.members.iter().any(|existing| names_equal(existing, member))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return self.message.fmt(f);
        }
        write!(f, "{} [{}]", self.message, self.members.join(", "))
    }
}

// ============================================================================
// SECTION: Formatting Helpers
// ============================================================================

/// Joins name tags into a stable comma-separated list for error messages.
pub(crate) fn comma_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let collected: Vec<&str> = names.into_iter().collect();
    collected.join(", ")
}
