// crates/channel-schema-core/src/schema/settings.rs
// ============================================================================
// Module: Connection Settings
// Description: Name-to-value snapshot of connection configuration.
// Purpose: Provide the settings lookup surface the validation engine reads.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Connection settings are the caller-supplied configuration a schema is
//! validated against: an ordered map from parameter key to JSON value. Keys
//! are stored verbatim but looked up with ASCII case folding, and an explicit
//! JSON `null` reads as absent. The raw entries remain enumerable for the
//! strict unknown-key pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::schema::identifiers::names_equal;

// ============================================================================
// SECTION: Connection Settings
// ============================================================================

/// Snapshot of connection configuration keyed by the caller's parameter keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionSettings {
    /// Raw entries in key order, verbatim keys, `null` values preserved.
    pub parameters: BTreeMap<String, Value>,
}

impl ConnectionSettings {
    /// Creates an empty settings snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this snapshot with one additional entry.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces one entry.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.parameters.insert(name.into(), value);
    }

    /// Resolves a parameter by name with ASCII case folding.
    ///
    /// An entry holding JSON `null` reads as absent, matching the engine's
    /// treatment of omitted parameters.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|(key, _)| names_equal(key, name))
            .map(|(_, value)| value)
            .filter(|value| !value.is_null())
    }

    /// Iterates the raw entries in key order, including `null` values.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parameters.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns true when the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the number of raw entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }
}
