// crates/channel-schema-core/tests/settings_validation.rs
// ============================================================================
// Module: Connection Settings Validation Tests
// Description: Tests for the settings validation pipeline.
// Purpose: Ensure every pass accumulates violations without short-circuiting.
// Dependencies: channel-schema-core, serde_json
// ============================================================================
//! ## Overview
//! Exercises required-parameter presence, type and allowed-value checks, and
//! the strict unknown-key pass against schemas of varying shape.
//!
//! Security posture: Settings may carry credentials; messages must name keys
//! without echoing supplied values.
//! Threat model: TM-SET-001 - Misconfigured connections accepted silently.

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
use channel_schema_core::ChannelSchema;
use channel_schema_core::ConnectionSettings;
use channel_schema_core::ParameterSpec;
use channel_schema_core::ParameterType;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sms_schema() -> ChannelSchema {
    let mut schema = ChannelSchema::new("twilio", "sms", "1.0");
    schema.parameters.push(ParameterSpec::required("account_sid", ParameterType::String));
    schema.parameters.push(
        ParameterSpec::optional("region", ParameterType::String)
            .with_allowed_values(vec![json!("us1"), json!("ie1")]),
    );
    schema.parameters.push(
        ParameterSpec::required("timeout_seconds", ParameterType::Integer)
            .with_default(json!(30)),
    );
    schema
}

fn valid_settings() -> ConnectionSettings {
    ConnectionSettings::new()
        .with("account_sid", json!("AC123"))
        .with("region", json!("us1"))
}

// ============================================================================
// SECTION: Success Path
// ============================================================================

/// Verifies conforming settings produce no violations.
#[test]
fn settings_pass_against_conforming_schema() {
    let errors = sms_schema().validate_connection_settings(&valid_settings());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

/// Verifies an empty schema accepts arbitrary settings.
#[test]
fn schema_without_parameters_accepts_anything() {
    let schema = ChannelSchema::new("acme", "chat", "1");
    let settings = ConnectionSettings::new().with("anything", json!(true));
    assert!(schema.validate_connection_settings(&settings).is_empty());
}

// ============================================================================
// SECTION: Required Parameters
// ============================================================================

/// Verifies a missing required parameter is reported and tagged.
#[test]
fn missing_required_parameter_is_reported() {
    let settings = ConnectionSettings::new().with("region", json!("us1"));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "required parameter missing: account_sid");
    assert!(errors[0].concerns("account_sid"));
}

/// Verifies a default covers absence of a required parameter.
#[test]
fn default_value_covers_required_absence() {
    let errors = sms_schema().validate_connection_settings(&valid_settings());
    assert!(errors.iter().all(|error| !error.concerns("timeout_seconds")));
}

/// Verifies an explicit null reads as absent.
#[test]
fn null_value_reads_as_absent() {
    let settings = valid_settings().with("account_sid", json!(null));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 1);
    assert!(errors[0].concerns("account_sid"));
}

/// Verifies supplied keys resolve with case folding.
#[test]
fn supplied_keys_resolve_case_folded() {
    let settings = ConnectionSettings::new().with("ACCOUNT_SID", json!("AC123"));
    let errors = sms_schema().validate_connection_settings(&settings);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

// ============================================================================
// SECTION: Value Constraints
// ============================================================================

/// Verifies type mismatches are reported per parameter.
#[test]
fn type_mismatch_is_reported() {
    let settings = valid_settings().with("account_sid", json!(42));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "parameter account_sid: expected string value");
}

/// Verifies integer parameters reject fractional values.
#[test]
fn integer_parameter_rejects_fraction() {
    let settings = valid_settings().with("timeout_seconds", json!(1.5));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "parameter timeout_seconds: expected integer value"
    );
}

/// Verifies number parameters accept both integral and fractional values.
#[test]
fn number_parameter_accepts_integral_values() {
    let mut schema = ChannelSchema::new("acme", "chat", "1");
    schema.parameters.push(ParameterSpec::optional("rate", ParameterType::Number));

    let integral = ConnectionSettings::new().with("rate", json!(2));
    assert!(schema.validate_connection_settings(&integral).is_empty());

    let fractional = ConnectionSettings::new().with("rate", json!(2.5));
    assert!(schema.validate_connection_settings(&fractional).is_empty());
}

/// Verifies values outside the allowed set are reported.
#[test]
fn disallowed_value_is_reported() {
    let settings = valid_settings().with("region", json!("mars1"));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        r#"parameter region: value must be one of: "us1", "ie1""#
    );
    assert!(errors[0].concerns("region"));
}

/// Verifies a wrongly typed value can violate both checks at once.
#[test]
fn type_and_allowed_value_checks_accumulate() {
    let settings = valid_settings().with("region", json!(7));
    let errors = sms_schema().validate_connection_settings(&settings);

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| error.concerns("region")));
}

// ============================================================================
// SECTION: Strict Mode
// ============================================================================

/// Verifies the strict flag alone toggles unknown-key reporting.
#[test]
fn strictness_toggles_unknown_key_reporting() {
    let mut lenient = sms_schema();
    lenient.strict = false;
    let mut strict = sms_schema();
    strict.strict = true;

    let settings = valid_settings().with("Foo", json!("bar"));

    assert!(lenient.validate_connection_settings(&settings).is_empty());

    let errors = strict.validate_connection_settings(&settings);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "unknown parameter: Foo");
    assert_eq!(errors[0].members, vec!["Foo".to_string()]);
}

/// Verifies declared names whitelist their case variants under strict mode.
#[test]
fn strict_mode_folds_declared_names() {
    let mut schema = sms_schema();
    schema.strict = true;

    let settings = ConnectionSettings::new()
        .with("ACCOUNT_SID", json!("AC123"))
        .with("Region", json!("us1"));
    let errors = schema.validate_connection_settings(&settings);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

/// Verifies authentication field names are known keys under strict mode.
#[test]
fn strict_mode_whitelists_authentication_fields() {
    let mut schema = ChannelSchema::new("acme", "chat", "1");
    schema.strict = true;
    schema.authentication.push(AuthenticationConfig::api_key());

    let settings = ConnectionSettings::new().with("api_key", json!("k-123"));
    let errors = schema.validate_connection_settings(&settings);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

// ============================================================================
// SECTION: Combined Failures
// ============================================================================

/// Verifies parameter and authentication gaps are reported together.
#[test]
fn parameter_and_authentication_gaps_accumulate() {
    let mut schema = ChannelSchema::new("acme", "chat", "1");
    schema.parameters.push(ParameterSpec::required("ApiKey", ParameterType::String));
    schema.authentication.push(AuthenticationConfig::api_key());

    let errors = schema.validate_connection_settings(&ConnectionSettings::new());

    assert_eq!(errors.len(), 2);
    assert!(errors[0].concerns("ApiKey"));
    assert_eq!(errors[0].message, "required parameter missing: ApiKey");
    assert!(errors[1].concerns("authentication"));
    assert!(errors[1].message.starts_with("authentication not satisfied"));
}
