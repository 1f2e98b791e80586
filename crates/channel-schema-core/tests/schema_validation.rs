// crates/channel-schema-core/tests/schema_validation.rs
// ============================================================================
// Module: Schema Validation Tests
// Description: Tests for channel schema structural invariants.
// Purpose: Ensure schemas fail closed on malformed declarations.
// Dependencies: channel-schema-core, serde_json
// ============================================================================
//! ## Overview
//! Exercises `ChannelSchema::validate`, the builder, and the declared wire
//! shape of a full schema document.
//!
//! Security posture: Schema validation is a trust boundary - must fail closed.
//! Threat model: TM-SCHEMA-001 - Malformed or colliding schema declarations.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use channel_schema_core::AuthenticationConfig;
use channel_schema_core::AuthenticationType;
use channel_schema_core::ChannelCapability;
use channel_schema_core::ChannelSchema;
use channel_schema_core::ContentKind;
use channel_schema_core::EndpointKind;
use channel_schema_core::EndpointSpec;
use channel_schema_core::FieldGroup;
use channel_schema_core::MessagePropertySpec;
use channel_schema_core::ParameterSpec;
use channel_schema_core::ParameterType;
use channel_schema_core::SchemaError;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn base_schema() -> ChannelSchema {
    let mut schema = ChannelSchema::new("twilio", "sms", "1.0");
    schema.capabilities.insert(ChannelCapability::Send);
    schema.parameters.push(ParameterSpec::required("account_sid", ParameterType::String));
    schema.parameters.push(ParameterSpec::optional("region", ParameterType::String));
    schema.message_properties.push(MessagePropertySpec::optional("priority"));
    schema.authentication.push(AuthenticationConfig::basic());
    schema
}

// ============================================================================
// SECTION: Success Path
// ============================================================================

/// Verifies a well-formed schema validates successfully.
#[test]
fn validate_accepts_well_formed_schema() {
    assert!(base_schema().validate().is_ok());
}

/// Verifies a bare identity-only schema validates successfully.
#[test]
fn validate_accepts_minimal_schema() {
    let schema = ChannelSchema::new("acme", "chat", "2");
    assert!(schema.validate().is_ok());
}

// ============================================================================
// SECTION: Identity
// ============================================================================

/// Verifies blank provider segments are rejected.
#[test]
fn validate_rejects_blank_provider() {
    let schema = ChannelSchema::new("   ", "sms", "1.0");
    assert!(matches!(schema.validate(), Err(SchemaError::EmptyProvider)));
}

/// Verifies blank channel type segments are rejected.
#[test]
fn validate_rejects_blank_channel_type() {
    let schema = ChannelSchema::new("twilio", "", "1.0");
    assert!(matches!(schema.validate(), Err(SchemaError::EmptyChannelType)));
}

/// Verifies blank version segments are rejected.
#[test]
fn validate_rejects_blank_version() {
    let schema = ChannelSchema::new("twilio", "sms", " ");
    assert!(matches!(schema.validate(), Err(SchemaError::EmptyVersion)));
}

/// Verifies the logical identity renders declared spelling verbatim.
#[test]
fn logical_identity_preserves_declared_spelling() {
    let schema = ChannelSchema::new("Twilio", "SMS", "1.0-Beta");
    assert_eq!(schema.logical_identity(), "Twilio/SMS/1.0-Beta");
}

// ============================================================================
// SECTION: Name Collisions
// ============================================================================

/// Verifies parameter names colliding under case folding are rejected.
#[test]
fn validate_rejects_case_folded_parameter_collision() {
    let mut schema = base_schema();
    schema.parameters.push(ParameterSpec::optional("ACCOUNT_SID", ParameterType::String));
    assert!(matches!(schema.validate(), Err(SchemaError::DuplicateParameter(_))));
}

/// Verifies message-property names colliding under case folding are rejected.
#[test]
fn validate_rejects_case_folded_property_collision() {
    let mut schema = base_schema();
    schema.message_properties.push(MessagePropertySpec::required("Priority"));
    assert!(matches!(schema.validate(), Err(SchemaError::DuplicateProperty(_))));
}

// ============================================================================
// SECTION: Authentication Shape
// ============================================================================

/// Verifies a credentialed configuration must declare field groups.
#[test]
fn validate_rejects_credentialed_config_without_groups() {
    let mut schema = base_schema();
    schema.authentication.push(
        AuthenticationConfig::api_key().with_field_groups(Vec::new()),
    );
    assert!(matches!(schema.validate(), Err(SchemaError::MissingFieldGroups(_))));
}

/// Verifies empty field groups are rejected.
#[test]
fn validate_rejects_empty_field_group() {
    let mut schema = base_schema();
    schema.authentication.push(AuthenticationConfig::custom(
        "broken method",
        vec![FieldGroup::of(Vec::<&str>::new())],
    ));
    assert!(matches!(schema.validate(), Err(SchemaError::EmptyFieldGroup(_))));
}

/// Verifies the open configuration must not declare field groups.
#[test]
fn validate_rejects_open_config_with_groups() {
    let mut schema = base_schema();
    schema.authentication.push(
        AuthenticationConfig::none().with_field_groups(vec![FieldGroup::of(["token"])]),
    );
    assert!(matches!(schema.validate(), Err(SchemaError::UnexpectedFieldGroups(_))));
}

/// Verifies duplicate authentication types are tolerated and deduplicated.
#[test]
fn duplicate_authentication_types_collapse_in_projection() {
    let mut schema = base_schema();
    schema.authentication.push(AuthenticationConfig::token());
    schema.authentication.push(
        AuthenticationConfig::basic().with_display_name("legacy credentials"),
    );
    assert!(schema.validate().is_ok());

    assert_eq!(
        schema.authentication_types(),
        vec![AuthenticationType::Basic, AuthenticationType::Token]
    );
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Verifies the builder assembles and validates a schema.
#[test]
fn builder_assembles_valid_schema() {
    let schema = ChannelSchema::builder("sendgrid", "email", "3")
        .display_name("SendGrid Email")
        .capability(ChannelCapability::Send)
        .capability(ChannelCapability::Templates)
        .parameter(ParameterSpec::required("api_key", ParameterType::String))
        .content_type(ContentKind::Html)
        .content_type(ContentKind::Text)
        .endpoint(EndpointSpec::bidirectional(EndpointKind::Email))
        .authentication(AuthenticationConfig::api_key())
        .message_property(MessagePropertySpec::optional("category"))
        .strict(true)
        .build()
        .expect("build schema");

    assert_eq!(schema.logical_identity(), "sendgrid/email/3");
    assert_eq!(schema.display_name.as_deref(), Some("SendGrid Email"));
    assert!(schema.supports_capability(ChannelCapability::Templates));
    assert!(schema.supports_content_type(ContentKind::Html));
    assert!(schema.supports_endpoint_kind(EndpointKind::Email));
    assert!(schema.supports_authentication_type(AuthenticationType::ApiKey));
    assert!(schema.strict);
}

/// Verifies the builder rejects schemas that fail validation.
#[test]
fn builder_rejects_invalid_schema() {
    let result = ChannelSchema::builder("acme", "chat", "1")
        .parameter(ParameterSpec::required("token", ParameterType::String))
        .parameter(ParameterSpec::optional("Token", ParameterType::String))
        .build();
    assert!(matches!(result, Err(SchemaError::DuplicateParameter(_))));
}

// ============================================================================
// SECTION: Wire Shape
// ============================================================================

/// Verifies a full schema document deserializes with defaults applied.
#[test]
fn schema_deserializes_from_declared_wire_shape() {
    let document = r#"{
        "channel_provider": "Twilio",
        "channel_type": "sms",
        "version": "1.0",
        "display_name": "Twilio SMS",
        "capabilities": ["send", "receive", "delivery_receipt"],
        "parameters": [
            {
                "name": "account_sid",
                "data_type": "string",
                "required": true
            },
            {
                "name": "region",
                "data_type": "string",
                "required": false,
                "default_value": "us1",
                "allowed_values": ["us1", "ie1", "au1"]
            }
        ],
        "content_types": ["text"],
        "endpoints": [
            { "kind": "phone_number", "can_send": true, "can_receive": true },
            { "kind": "short_code", "can_send": true, "can_receive": false }
        ],
        "authentication": [
            {
                "auth_type": "basic",
                "display_name": "account credentials",
                "field_groups": [["account_sid", "auth_token"]]
            }
        ],
        "message_properties": [
            { "name": "status_callback", "required": false }
        ],
        "strict": true
    }"#;

    let schema: ChannelSchema = serde_json::from_str(document).expect("deserialize schema");
    assert!(schema.validate().is_ok());
    assert_eq!(schema.logical_identity(), "Twilio/sms/1.0");
    assert_eq!(schema.capabilities.len(), 3);
    assert!(schema.parameter("REGION").is_some());
    assert!(schema.parameter("region").expect("region spec").has_default());
    assert_eq!(schema.endpoints.len(), 2);
    assert_eq!(schema.authentication_types(), vec![AuthenticationType::Basic]);
    assert!(schema.strict);
}

/// Verifies omitted sections default to the no-statement form.
#[test]
fn schema_defaults_omitted_sections_to_empty() {
    let document = r#"{
        "channel_provider": "acme",
        "channel_type": "chat",
        "version": "1"
    }"#;

    let schema: ChannelSchema = serde_json::from_str(document).expect("deserialize schema");
    assert!(schema.validate().is_ok());
    assert!(schema.capabilities.is_empty());
    assert!(schema.parameters.is_empty());
    assert!(schema.content_types.is_empty());
    assert!(schema.endpoints.is_empty());
    assert!(schema.authentication.is_empty());
    assert!(schema.message_properties.is_empty());
    assert!(!schema.strict);
}
