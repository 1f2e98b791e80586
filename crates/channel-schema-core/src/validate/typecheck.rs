// crates/channel-schema-core/src/validate/typecheck.rs
// ============================================================================
// Module: Type Compatibility
// Description: Runtime value compatibility matrix for declared parameter types.
// Purpose: Decide whether one JSON value satisfies one declared data type.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! One pure function maps a declared [`ParameterType`] and a runtime JSON
//! value to a compatibility verdict. Boolean and string accept only their own
//! JSON shapes; integer accepts any number representable as a signed 64-bit
//! integer; number accepts any JSON number. The check never runs against an
//! absent value, so absence is handled by the pipelines, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::schema::parameter::ParameterType;

// ============================================================================
// SECTION: Compatibility Matrix
// ============================================================================

/// Returns true when the value satisfies the declared data type.
#[must_use]
pub fn is_type_compatible(data_type: ParameterType, value: &Value) -> bool {
    match data_type {
        ParameterType::Boolean => value.is_boolean(),
        ParameterType::String => value.is_string(),
        ParameterType::Integer => value.as_i64().is_some(),
        ParameterType::Number => value.is_number(),
    }
}
