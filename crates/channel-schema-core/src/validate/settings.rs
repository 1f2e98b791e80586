// crates/channel-schema-core/src/validate/settings.rs
// ============================================================================
// Module: Connection Settings Validation
// Description: Pipeline checking connection settings against a channel schema.
// Purpose: Accumulate every settings violation across four independent passes.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The settings pipeline runs four passes: required-parameter presence, type
//! and allowed-value constraints, authentication satisfaction, and the
//! strict unknown-key scan. Every pass runs regardless of earlier failures
//! and returns its own error list; the entry point concatenates them, so each
//! rule stays independently testable and the caller sees the complete
//! picture in one call.
//!
//! Security posture: settings may hold credentials. Messages name offending
//! keys but never echo supplied values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::schema::authentication::AuthenticationType;
use crate::schema::channel::ChannelSchema;
use crate::schema::identifiers::FieldName;
use crate::schema::settings::ConnectionSettings;
use crate::validate::result::ValidationError;
use crate::validate::result::comma_list;
use crate::validate::typecheck::is_type_compatible;

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Validates connection settings against a schema.
///
/// Returns the union of all violations found; an empty vector means the
/// settings satisfy the schema.
#[must_use]
pub fn validate_connection_settings(
    schema: &ChannelSchema,
    settings: &ConnectionSettings,
) -> Vec<ValidationError> {
    let mut errors = check_required_parameters(schema, settings);
    errors.extend(check_parameter_values(schema, settings));
    errors.extend(check_authentication(schema, settings));
    errors.extend(check_unknown_parameters(schema, settings));
    errors
}

// ============================================================================
// SECTION: Required Parameters
// ============================================================================

/// Reports each required parameter that resolves to no value.
///
/// A configured default covers absence; a supplied value of any shape counts
/// as present, with shape judged by the value pass.
fn check_required_parameters(
    schema: &ChannelSchema,
    settings: &ConnectionSettings,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &schema.parameters {
        if !spec.required || spec.has_default() {
            continue;
        }
        if settings.parameter(spec.name.as_str()).is_none() {
            errors.push(ValidationError::for_member(
                spec.name.as_str(),
                format!("required parameter missing: {}", spec.name),
            ));
        }
    }
    errors
}

// ============================================================================
// SECTION: Value Constraints
// ============================================================================

/// Reports type and allowed-value violations on supplied parameter values.
fn check_parameter_values(
    schema: &ChannelSchema,
    settings: &ConnectionSettings,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &schema.parameters {
        let Some(value) = settings.parameter(spec.name.as_str()) else {
            continue;
        };
        if !is_type_compatible(spec.data_type, value) {
            errors.push(ValidationError::for_member(
                spec.name.as_str(),
                format!(
                    "parameter {}: expected {} value",
                    spec.name,
                    spec.data_type.as_str(),
                ),
            ));
        }
        if !spec.permits(value) {
            let rendered: Vec<String> =
                spec.allowed_values.iter().map(ToString::to_string).collect();
            errors.push(ValidationError::for_member(
                spec.name.as_str(),
                format!(
                    "parameter {}: value must be one of: {}",
                    spec.name,
                    comma_list(rendered.iter().map(String::as_str)),
                ),
            ));
        }
    }
    errors
}

// ============================================================================
// SECTION: Authentication
// ============================================================================

/// Evaluates authentication satisfaction, returning zero or one error.
///
/// An empty configuration set makes no statement; a set containing only the
/// open configuration passes unconditionally. Otherwise satisfaction is OR
/// across the non-open configurations with short-circuit, and total failure
/// aggregates every viable path into a single error so the caller sees all
/// supported methods at once.
fn check_authentication(
    schema: &ChannelSchema,
    settings: &ConnectionSettings,
) -> Vec<ValidationError> {
    if schema.authentication.is_empty() {
        return Vec::new();
    }
    let required: Vec<_> = schema
        .authentication
        .iter()
        .filter(|config| config.auth_type != AuthenticationType::None)
        .collect();
    if required.is_empty() {
        return Vec::new();
    }
    if required.iter().any(|config| config.is_satisfied_by(settings)) {
        return Vec::new();
    }
    if schema
        .authentication
        .iter()
        .any(|config| config.auth_type == AuthenticationType::None)
    {
        return Vec::new();
    }

    let methods = comma_list(required.iter().map(|config| config.display_name.as_str()));
    let mut details: Vec<String> = Vec::new();
    for config in &required {
        for failure in config.validate(settings) {
            details.push(failure.message);
        }
    }
    let message = format!(
        "authentication not satisfied; supported methods: {methods}; {}",
        details.join("; "),
    );
    vec![ValidationError::for_member("authentication", message)]
}

// ============================================================================
// SECTION: Unknown Parameters
// ============================================================================

/// Reports undeclared settings keys when the schema is strict.
///
/// Keys naming a declared parameter or any authentication field are known;
/// everything else is one error per key, tagged with the caller's key
/// verbatim.
fn check_unknown_parameters(
    schema: &ChannelSchema,
    settings: &ConnectionSettings,
) -> Vec<ValidationError> {
    if !schema.strict {
        return Vec::new();
    }
    let mut known_fields: Vec<FieldName> = Vec::new();
    for config in &schema.authentication {
        for field in config.field_names() {
            if !known_fields.contains(&field) {
                known_fields.push(field);
            }
        }
    }

    let mut errors = Vec::new();
    for (key, _) in settings.entries() {
        let declared = schema
            .parameters
            .iter()
            .any(|spec| spec.name.matches(key));
        let credential = known_fields.iter().any(|field| field.matches(key));
        if !declared && !credential {
            errors.push(ValidationError::for_member(
                key,
                format!("unknown parameter: {key}"),
            ));
        }
    }
    errors
}
