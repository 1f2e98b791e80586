// crates/channel-schema-core/src/validate/message.rs
// ============================================================================
// Module: Message Validation
// Description: Pipeline checking one message against a channel schema.
// Purpose: Accumulate identifier, endpoint, content, and property violations.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The message pipeline mirrors the settings pipeline's shape: independent
//! passes over identifier, endpoints, content kind, and the property bag,
//! each returning its own error list. A schema that declares no endpoint
//! specs or no content kinds makes no statement on that axis, and the
//! corresponding pass is skipped entirely rather than failing everything.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::schema::channel::ChannelSchema;
use crate::schema::endpoint::Endpoint;
use crate::schema::message::ChannelMessage;
use crate::validate::result::ValidationError;
use crate::validate::result::comma_list;

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Validates a message against a schema.
///
/// Returns the union of all violations found; an empty vector means the
/// message satisfies the schema.
#[must_use]
pub fn validate_message(
    schema: &ChannelSchema,
    message: &ChannelMessage,
) -> Vec<ValidationError> {
    let mut errors = check_message_id(message);
    errors.extend(check_endpoints(schema, message));
    errors.extend(check_content(schema, message));
    errors.extend(check_properties(schema, message));
    errors
}

// ============================================================================
// SECTION: Identifier
// ============================================================================

/// Reports a blank message identifier.
fn check_message_id(message: &ChannelMessage) -> Vec<ValidationError> {
    if message.id.trim().is_empty() {
        return vec![ValidationError::for_member(
            "id",
            "message identifier must not be blank",
        )];
    }
    Vec::new()
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Checks sender and receiver endpoints against the declared endpoint specs.
///
/// Skipped entirely when the schema declares no endpoint specs. An absent
/// endpoint is not a violation; direction is judged only for endpoints the
/// message actually carries.
fn check_endpoints(
    schema: &ChannelSchema,
    message: &ChannelMessage,
) -> Vec<ValidationError> {
    if schema.endpoints.is_empty() {
        return Vec::new();
    }
    let mut errors = Vec::new();
    if let Some(sender) = &message.sender
        && !accepted_for_send(schema, sender)
    {
        errors.push(ValidationError::for_member(
            "sender",
            format!(
                "sender endpoint kind {} not accepted for sending; send-capable kinds: {}",
                sender.kind.as_str(),
                comma_list(direction_kinds(schema, true)),
            ),
        ));
    }
    if let Some(receiver) = &message.receiver
        && !accepted_for_receive(schema, receiver)
    {
        errors.push(ValidationError::for_member(
            "receiver",
            format!(
                "receiver endpoint kind {} not accepted for receiving; receive-capable kinds: {}",
                receiver.kind.as_str(),
                comma_list(direction_kinds(schema, false)),
            ),
        ));
    }
    errors
}

/// Returns true when some send-capable spec covers the endpoint kind.
fn accepted_for_send(schema: &ChannelSchema, endpoint: &Endpoint) -> bool {
    schema
        .endpoints
        .iter()
        .any(|spec| spec.can_send && spec.matches(endpoint.kind))
}

/// Returns true when some receive-capable spec covers the endpoint kind.
fn accepted_for_receive(schema: &ChannelSchema, endpoint: &Endpoint) -> bool {
    schema
        .endpoints
        .iter()
        .any(|spec| spec.can_receive && spec.matches(endpoint.kind))
}

/// Lists the declared kinds capable of one direction, deduplicated.
fn direction_kinds(schema: &ChannelSchema, sending: bool) -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = Vec::new();
    for spec in &schema.endpoints {
        let capable = if sending { spec.can_send } else { spec.can_receive };
        let tag = spec.kind.as_str();
        if capable && !kinds.contains(&tag) {
            kinds.push(tag);
        }
    }
    kinds
}

// ============================================================================
// SECTION: Content
// ============================================================================

/// Checks the content kind against the declared content kinds.
///
/// Skipped when the schema declares no content kinds or the message carries
/// no content.
fn check_content(schema: &ChannelSchema, message: &ChannelMessage) -> Vec<ValidationError> {
    if schema.content_types.is_empty() {
        return Vec::new();
    }
    let Some(content) = &message.content else {
        return Vec::new();
    };
    let kind = content.kind();
    if schema.content_types.contains(&kind) {
        return Vec::new();
    }
    let supported: Vec<&str> = schema
        .content_types
        .iter()
        .map(|declared| declared.as_str())
        .collect();
    vec![ValidationError::for_member(
        "content",
        format!(
            "content kind {} not supported; supported kinds: {}",
            kind.as_str(),
            comma_list(supported),
        ),
    )]
}

// ============================================================================
// SECTION: Properties
// ============================================================================

/// Runs every property spec against the resolved property values, then the
/// strict unknown-property scan.
fn check_properties(
    schema: &ChannelSchema,
    message: &ChannelMessage,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &schema.message_properties {
        errors.extend(spec.validate(message.property(spec.name.as_str())));
    }
    if schema.strict {
        for (key, _) in message.property_entries() {
            let declared = schema
                .message_properties
                .iter()
                .any(|spec| spec.name.matches(key));
            if !declared {
                errors.push(ValidationError::for_member(
                    key,
                    format!("unknown message property: {key}"),
                ));
            }
        }
    }
    errors
}
