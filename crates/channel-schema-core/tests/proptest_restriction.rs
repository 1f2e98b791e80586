// crates/channel-schema-core/tests/proptest_restriction.rs
// ============================================================================
// Module: Restriction Property-Based Tests
// Description: Property tests for compatibility and restriction invariants.
// Purpose: Detect panics and invariant drift across wide input ranges.
// ============================================================================

//! Property-based tests for compatibility, restriction, and validation
//! invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use channel_schema_core::CapabilitySet;
use channel_schema_core::ChannelCapability;
use channel_schema_core::ChannelSchema;
use channel_schema_core::ConnectionSettings;
use channel_schema_core::ParameterSpec;
use channel_schema_core::ParameterType;
use channel_schema_core::schema::names_equal;
use proptest::prelude::*;
use serde_json::Value;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_.-]{0,11}"
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn capability_set_strategy() -> impl Strategy<Value = CapabilitySet> {
    prop::sample::subsequence(ChannelCapability::ALL.to_vec(), 0..=8)
        .prop_map(CapabilitySet::from)
}

fn leaf_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

fn schema_from(identity: &(String, String, String), capabilities: CapabilitySet) -> ChannelSchema {
    let mut schema = ChannelSchema::new(
        identity.0.as_str(),
        identity.1.as_str(),
        identity.2.as_str(),
    );
    schema.capabilities = capabilities;
    schema
}

proptest! {
    #[test]
    fn restriction_of_self_is_empty(
        identity in (segment_strategy(), segment_strategy(), segment_strategy()),
        capabilities in capability_set_strategy(),
        parameter_names in prop::collection::btree_set(field_name_strategy(), 0..5),
    ) {
        let mut schema = schema_from(&identity, capabilities);
        for name in parameter_names {
            schema.parameters.push(ParameterSpec::optional(name, ParameterType::String));
        }
        prop_assert!(schema.validate_as_restriction_of(&schema).is_empty());
    }

    #[test]
    fn compatibility_folds_case_and_is_symmetric(
        identity in (segment_strategy(), segment_strategy(), segment_strategy()),
        capabilities in capability_set_strategy(),
    ) {
        let declared = schema_from(&identity, capabilities);
        let folded = ChannelSchema::new(
            identity.0.to_ascii_uppercase(),
            identity.1.to_ascii_lowercase(),
            identity.2.to_ascii_uppercase(),
        );
        prop_assert!(declared.is_compatible_with(&folded));
        prop_assert!(folded.is_compatible_with(&declared));
    }

    #[test]
    fn capability_subset_children_never_report_capabilities(
        identity in (segment_strategy(), segment_strategy(), segment_strategy()),
        parent_capabilities in capability_set_strategy(),
        child_capabilities in capability_set_strategy(),
    ) {
        let parent = schema_from(&identity, parent_capabilities);
        let child = schema_from(&identity, child_capabilities.intersection(parent_capabilities));

        let errors = child.validate_as_restriction_of(&parent);
        prop_assert!(errors.iter().all(|error| !error.concerns("capabilities")));
    }

    #[test]
    fn capability_excess_is_always_reported(
        identity in (segment_strategy(), segment_strategy(), segment_strategy()),
        parent_capabilities in capability_set_strategy(),
        child_capabilities in capability_set_strategy(),
    ) {
        let parent = schema_from(&identity, parent_capabilities);
        let child = schema_from(&identity, child_capabilities);

        let errors = child.validate_as_restriction_of(&parent);
        let excess = child_capabilities.difference(parent_capabilities);
        if excess.is_empty() {
            prop_assert!(errors.is_empty());
        } else {
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors[0].concerns("capabilities"));
        }
    }

    #[test]
    fn settings_validation_is_deterministic_and_total(
        entries in prop::collection::btree_map("[A-Za-z_]{1,10}", leaf_value_strategy(), 0..6),
    ) {
        let mut schema = ChannelSchema::new("acme", "chat", "1");
        schema.strict = true;
        schema.parameters.push(ParameterSpec::required("endpoint", ParameterType::String));
        schema.parameters.push(ParameterSpec::optional("retries", ParameterType::Integer));

        let mut settings = ConnectionSettings::new();
        for (key, value) in entries {
            settings.insert(key, value);
        }

        let first = schema.validate_connection_settings(&settings);
        let second = schema.validate_connection_settings(&settings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn names_equal_is_a_case_insensitive_equivalence(
        a in "[ -~]{0,16}",
        b in "[ -~]{0,16}",
    ) {
        prop_assert!(names_equal(&a, &a));
        prop_assert_eq!(names_equal(&a, &b), names_equal(&b, &a));
        prop_assert_eq!(names_equal(&a, &b), names_equal(&a.to_ascii_uppercase(), &b));
    }
}
