// crates/channel-schema-core/src/schema/parameter.rs
// ============================================================================
// Module: Parameter Specs
// Description: Declarative connection-parameter requirements.
// Purpose: Describe one configuration parameter a connector accepts.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A parameter spec declares one connection setting: its name, its expected
//! data type, whether it is required, an optional default, and an optional
//! finite set of allowed values. Specs are declarative only; the settings
//! pipeline in [`crate::validate`] interprets them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::schema::identifiers::FieldName;

// ============================================================================
// SECTION: Parameter Types
// ============================================================================

/// Expected data type of a connection parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// Boolean values only.
    Boolean,
    /// String values only.
    String,
    /// Integer values representable as a signed 64-bit integer.
    Integer,
    /// Any numeric value, integral or floating point.
    Number,
}

impl ParameterType {
    /// Returns the stable lowercase tag for this parameter type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

// ============================================================================
// SECTION: Parameter Spec
// ============================================================================

/// Declaration of one connection parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Declared parameter name, unique within a schema under case folding.
    pub name: FieldName,
    /// Expected data type for supplied values.
    pub data_type: ParameterType,
    /// Whether the parameter must resolve to a value.
    pub required: bool,
    /// Default applied when the caller omits the parameter.
    #[serde(default)]
    pub default_value: Option<Value>,
    /// Finite set of allowed values; empty means unconstrained.
    #[serde(default)]
    pub allowed_values: Vec<Value>,
}

impl ParameterSpec {
    /// Creates a required parameter with no default and no value constraint.
    #[must_use]
    pub fn required(name: impl Into<FieldName>, data_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
            default_value: None,
            allowed_values: Vec::new(),
        }
    }

    /// Creates an optional parameter with no default and no value constraint.
    #[must_use]
    pub fn optional(name: impl Into<FieldName>, data_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: false,
            default_value: None,
            allowed_values: Vec::new(),
        }
    }

    /// Attaches a default value covering absence of the parameter.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Restricts supplied values to a finite allowed set.
    #[must_use]
    pub fn with_allowed_values(mut self, values: Vec<Value>) -> Self {
        self.allowed_values = values;
        self
    }

    /// Returns true when absence of the parameter is covered by a default.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Returns true when the supplied value passes the allowed-value check.
    ///
    /// An empty allowed set constrains nothing.
    #[must_use]
    pub fn permits(&self, value: &Value) -> bool {
        self.allowed_values.is_empty() || self.allowed_values.contains(value)
    }
}
