// crates/channel-schema-core/src/schema/property.rs
// ============================================================================
// Module: Message Property Specs
// Description: Declarative per-property requirements for message validation.
// Purpose: Describe one message property and the checks applied to its value.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A message property spec declares one named property a message may carry,
//! whether it is required, and the constraints applied to a supplied value.
//! Constraints are closed data variants rather than pluggable callbacks, so
//! schemas remain serializable and two equal schemas always validate
//! identically. Presence-when-required is intrinsic: [`MessagePropertySpec::validate`]
//! reports a missing required property before any constraint runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Number;
use serde_json::Value;

use crate::schema::identifiers::FieldName;
use crate::schema::parameter::ParameterType;
use crate::validate::result::ValidationError;
use crate::validate::result::comma_list;
use crate::validate::typecheck::is_type_compatible;

// ============================================================================
// SECTION: Property Constraints
// ============================================================================

/// One check applied to a supplied message-property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyConstraint {
    /// Value must satisfy the declared data type.
    Type(ParameterType),
    /// Value must be a member of a finite set.
    OneOf(Vec<Value>),
    /// String value must not exceed a character count.
    MaxLength(usize),
    /// Numeric value must fall within an inclusive range.
    Range {
        /// Inclusive lower bound, unbounded when absent.
        #[serde(default)]
        min: Option<Number>,
        /// Inclusive upper bound, unbounded when absent.
        #[serde(default)]
        max: Option<Number>,
    },
}

impl PropertyConstraint {
    /// Applies this constraint to a supplied value.
    ///
    /// Shape-specific constraints only judge values of their shape: a length
    /// bound ignores non-strings and a range bound ignores non-numbers,
    /// leaving shape enforcement to a `Type` constraint on the same spec.
    fn check(&self, name: &FieldName, value: &Value) -> Vec<ValidationError> {
        match self {
            Self::Type(data_type) => {
                if is_type_compatible(*data_type, value) {
                    Vec::new()
                } else {
                    vec![ValidationError::for_member(
                        name.as_str(),
                        format!(
                            "message property {name}: expected {} value",
                            data_type.as_str(),
                        ),
                    )]
                }
            }
            Self::OneOf(allowed) => {
                if allowed.contains(value) {
                    Vec::new()
                } else {
                    let rendered: Vec<String> =
                        allowed.iter().map(Value::to_string).collect();
                    vec![ValidationError::for_member(
                        name.as_str(),
                        format!(
                            "message property {name}: value must be one of: {}",
                            comma_list(rendered.iter().map(String::as_str)),
                        ),
                    )]
                }
            }
            Self::MaxLength(limit) => {
                let Some(text) = value.as_str() else {
                    return Vec::new();
                };
                if text.chars().count() <= *limit {
                    Vec::new()
                } else {
                    vec![ValidationError::for_member(
                        name.as_str(),
                        format!("message property {name}: exceeds maximum length {limit}"),
                    )]
                }
            }
            Self::Range {
                min,
                max,
            } => {
                let Some(number) = value.as_f64() else {
                    return Vec::new();
                };
                let mut errors = Vec::new();
                if let Some(lower) = min.as_ref().and_then(Number::as_f64)
                    && number < lower
                {
                    errors.push(ValidationError::for_member(
                        name.as_str(),
                        format!("message property {name}: value below minimum {lower}"),
                    ));
                }
                if let Some(upper) = max.as_ref().and_then(Number::as_f64)
                    && number > upper
                {
                    errors.push(ValidationError::for_member(
                        name.as_str(),
                        format!("message property {name}: value above maximum {upper}"),
                    ));
                }
                errors
            }
        }
    }
}

// ============================================================================
// SECTION: Property Spec
// ============================================================================

/// Declaration of one message property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePropertySpec {
    /// Declared property name, unique within a schema under case folding.
    pub name: FieldName,
    /// Whether the property must be supplied.
    pub required: bool,
    /// Checks applied to a supplied value, in declaration order.
    #[serde(default)]
    pub constraints: Vec<PropertyConstraint>,
}

impl MessagePropertySpec {
    /// Creates a required property spec with no value constraints.
    #[must_use]
    pub fn required(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            required: true,
            constraints: Vec::new(),
        }
    }

    /// Creates an optional property spec with no value constraints.
    #[must_use]
    pub fn optional(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            required: false,
            constraints: Vec::new(),
        }
    }

    /// Appends one value constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: PropertyConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Validates a resolved property value against this spec.
    ///
    /// Absence of an optional property is not an error; absence of a required
    /// property is exactly one error, and constraints run only on supplied
    /// values.
    pub fn validate(&self, value: Option<&Value>) -> Vec<ValidationError> {
        let Some(value) = value else {
            if self.required {
                return vec![ValidationError::for_member(
                    self.name.as_str(),
                    format!("required message property missing: {}", self.name),
                )];
            }
            return Vec::new();
        };
        let mut errors = Vec::new();
        for constraint in &self.constraints {
            errors.extend(constraint.check(&self.name, value));
        }
        errors
    }
}
