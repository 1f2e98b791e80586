// crates/channel-schema-core/src/validate/restriction.rs
// ============================================================================
// Module: Compatibility and Restriction
// Description: Identity comparison and subset checking between two schemas.
// Purpose: Decide whether one schema is a safe, narrower view of another.
// Dependencies: none beyond the schema model
// ============================================================================

//! ## Overview
//! Two schemas are compatible when their identity triples match under ASCII
//! case folding; compatibility is an equivalence relation and the sole gate
//! for restriction checking. Restriction validation short-circuits exactly
//! once, on incompatible identities, and otherwise accumulates every subset
//! violation: capabilities, parameter names, content kinds, authentication
//! types, endpoint kinds, and message-property names. An empty result means
//! any settings or message valid against the child is structurally valid
//! against the parent; value-level narrowing is deliberately out of scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::schema::channel::ChannelSchema;
use crate::schema::content::ContentKind;
use crate::schema::endpoint::EndpointKind;
use crate::validate::result::ValidationError;
use crate::validate::result::comma_list;

// ============================================================================
// SECTION: Compatibility
// ============================================================================

/// Returns true when both schemas share one identity under case folding.
#[must_use]
pub fn is_compatible_with(a: &ChannelSchema, b: &ChannelSchema) -> bool {
    a.channel_provider == b.channel_provider
        && a.channel_type == b.channel_type
        && a.version == b.version
}

// ============================================================================
// SECTION: Restriction
// ============================================================================

/// Validates that `child` declares a subset of `parent`'s surface.
///
/// Incompatible identities yield exactly one error and no subset checks run;
/// compatible schemas accumulate every subset violation found.
#[must_use]
pub fn validate_as_restriction_of(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    if !is_compatible_with(child, parent) {
        return vec![identity_mismatch(child, parent)];
    }
    let mut errors = check_capability_subset(child, parent);
    errors.extend(check_parameter_subset(child, parent));
    errors.extend(check_content_subset(child, parent));
    errors.extend(check_authentication_subset(child, parent));
    errors.extend(check_endpoint_subset(child, parent));
    errors.extend(check_property_subset(child, parent));
    errors
}

/// Builds the single identity-mismatch error, naming the differing segments.
fn identity_mismatch(child: &ChannelSchema, parent: &ChannelSchema) -> ValidationError {
    let mut error = ValidationError::new(format!(
        "schema identity mismatch: {} is not {}",
        child.logical_identity(),
        parent.logical_identity(),
    ));
    if child.channel_provider != parent.channel_provider {
        error = error.with_member("channel_provider");
    }
    if child.channel_type != parent.channel_type {
        error = error.with_member("channel_type");
    }
    if child.version != parent.version {
        error = error.with_member("version");
    }
    error
}

/// Reports child capabilities the parent does not declare.
fn check_capability_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let excess = child.capabilities.difference(parent.capabilities);
    if excess.is_empty() {
        return Vec::new();
    }
    let names: Vec<&'static str> = excess.iter().map(|capability| capability.as_str()).collect();
    vec![ValidationError::for_member(
        "capabilities",
        format!(
            "capabilities not supported by the parent schema: {}",
            comma_list(names),
        ),
    )]
}

/// Reports each child parameter name missing from the parent.
fn check_parameter_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &child.parameters {
        if parent.parameter(spec.name.as_str()).is_none() {
            errors.push(ValidationError::for_member(
                spec.name.as_str(),
                format!("parameter not declared by the parent schema: {}", spec.name),
            ));
        }
    }
    errors
}

/// Reports child content kinds the parent does not declare.
fn check_content_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let mut unsupported: Vec<ContentKind> = Vec::new();
    for kind in &child.content_types {
        if !parent.content_types.contains(kind) && !unsupported.contains(kind) {
            unsupported.push(*kind);
        }
    }
    if unsupported.is_empty() {
        return Vec::new();
    }
    let names: Vec<&'static str> = unsupported.iter().map(|kind| kind.as_str()).collect();
    vec![ValidationError::for_member(
        "content_types",
        format!(
            "content kinds not supported by the parent schema: {}",
            comma_list(names),
        ),
    )]
}

/// Reports child authentication types the parent's configurations lack.
fn check_authentication_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let unsupported: Vec<&'static str> = child
        .authentication_types()
        .into_iter()
        .filter(|auth_type| !parent.supports_authentication_type(*auth_type))
        .map(|auth_type| auth_type.as_str())
        .collect();
    if unsupported.is_empty() {
        return Vec::new();
    }
    vec![ValidationError::for_member(
        "authentication",
        format!(
            "authentication types not supported by the parent schema: {}",
            comma_list(unsupported),
        ),
    )]
}

/// Reports child endpoint kinds no parent spec covers.
///
/// Coverage is wildcard-aware on the parent side: a parent `any` spec covers
/// every child kind, while a child `any` spec needs a parent `any` spec.
fn check_endpoint_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let mut unmatched: Vec<EndpointKind> = Vec::new();
    for spec in &child.endpoints {
        let covered = parent.endpoints.iter().any(|candidate| candidate.matches(spec.kind));
        if !covered && !unmatched.contains(&spec.kind) {
            unmatched.push(spec.kind);
        }
    }
    if unmatched.is_empty() {
        return Vec::new();
    }
    let names: Vec<&'static str> = unmatched.iter().map(|kind| kind.as_str()).collect();
    vec![ValidationError::for_member(
        "endpoints",
        format!(
            "endpoint kinds not supported by the parent schema: {}",
            comma_list(names),
        ),
    )]
}

/// Reports each child message-property name missing from the parent.
fn check_property_subset(
    child: &ChannelSchema,
    parent: &ChannelSchema,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &child.message_properties {
        if parent.message_property(spec.name.as_str()).is_none() {
            errors.push(ValidationError::for_member(
                spec.name.as_str(),
                format!(
                    "message property not declared by the parent schema: {}",
                    spec.name,
                ),
            ));
        }
    }
    errors
}
