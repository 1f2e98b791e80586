// crates/channel-schema-core/tests/capability.rs
// ============================================================================
// Module: Capability Set Tests
// Description: Tests for capability set algebra and wire shape.
// Purpose: Ensure set operations and tag-list serialization stay stable.
// Dependencies: channel-schema-core, serde_json
// ============================================================================
//! ## Overview
//! Exercises `CapabilitySet` membership, algebra, and serde behavior.

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

use channel_schema_core::CapabilitySet;
use channel_schema_core::ChannelCapability;

// ============================================================================
// SECTION: Membership
// ============================================================================

/// Verifies the empty set contains nothing.
#[test]
fn empty_set_has_no_members() {
    let set = CapabilitySet::empty();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    for capability in ChannelCapability::ALL {
        assert!(!set.contains(capability));
    }
}

/// Verifies insertion and the `with` builder agree.
#[test]
fn insert_and_with_produce_equal_sets() {
    let mut inserted = CapabilitySet::empty();
    inserted.insert(ChannelCapability::Send);
    inserted.insert(ChannelCapability::Batch);

    let built = CapabilitySet::empty()
        .with(ChannelCapability::Send)
        .with(ChannelCapability::Batch);

    assert_eq!(inserted, built);
    assert!(built.contains(ChannelCapability::Send));
    assert!(built.contains(ChannelCapability::Batch));
    assert!(!built.contains(ChannelCapability::Receive));
    assert_eq!(built.len(), 2);
}

/// Verifies repeated insertion is idempotent.
#[test]
fn insert_is_idempotent() {
    let mut set = CapabilitySet::empty();
    set.insert(ChannelCapability::Templates);
    set.insert(ChannelCapability::Templates);
    assert_eq!(set.len(), 1);
}

// ============================================================================
// SECTION: Set Algebra
// ============================================================================

/// Verifies union, intersection, and difference behave as set algebra.
#[test]
fn set_algebra_matches_expectations() {
    let sending = CapabilitySet::empty()
        .with(ChannelCapability::Send)
        .with(ChannelCapability::Batch);
    let receiving = CapabilitySet::empty()
        .with(ChannelCapability::Receive)
        .with(ChannelCapability::Batch);

    let union = sending.union(receiving);
    assert_eq!(union.len(), 3);
    assert!(union.contains(ChannelCapability::Send));
    assert!(union.contains(ChannelCapability::Receive));

    let intersection = sending.intersection(receiving);
    assert_eq!(intersection.len(), 1);
    assert!(intersection.contains(ChannelCapability::Batch));

    let difference = sending.difference(receiving);
    assert_eq!(difference.len(), 1);
    assert!(difference.contains(ChannelCapability::Send));
}

/// Verifies subset tests, including the empty and reflexive cases.
#[test]
fn subset_test_covers_edge_cases() {
    let small = CapabilitySet::empty().with(ChannelCapability::Send);
    let large = small.with(ChannelCapability::Receive);

    assert!(small.is_subset_of(large));
    assert!(!large.is_subset_of(small));
    assert!(small.is_subset_of(small));
    assert!(CapabilitySet::empty().is_subset_of(small));
    assert!(CapabilitySet::empty().is_subset_of(CapabilitySet::empty()));
}

/// Verifies iteration yields members in declaration order.
#[test]
fn iteration_follows_declaration_order() {
    let set = CapabilitySet::empty()
        .with(ChannelCapability::Scheduling)
        .with(ChannelCapability::Send)
        .with(ChannelCapability::Attachments);

    let members: Vec<ChannelCapability> = set.iter().collect();
    assert_eq!(
        members,
        vec![
            ChannelCapability::Send,
            ChannelCapability::Attachments,
            ChannelCapability::Scheduling,
        ]
    );
}

// ============================================================================
// SECTION: Wire Shape
// ============================================================================

/// Verifies sets serialize as tag lists in declaration order.
#[test]
fn set_serializes_as_tag_list() {
    let set = CapabilitySet::empty()
        .with(ChannelCapability::DeliveryReceipt)
        .with(ChannelCapability::Send);

    let json = serde_json::to_string(&set).expect("serialize set");
    assert_eq!(json, r#"["send","delivery_receipt"]"#);
}

/// Verifies deserialization accepts tag lists and collapses duplicates.
#[test]
fn set_deserializes_from_tag_list() {
    let set: CapabilitySet =
        serde_json::from_str(r#"["receive","send","receive"]"#).expect("deserialize set");

    assert_eq!(set.len(), 2);
    assert!(set.contains(ChannelCapability::Send));
    assert!(set.contains(ChannelCapability::Receive));
}

/// Verifies unknown capability tags are rejected at the boundary.
#[test]
fn set_rejects_unknown_tags() {
    let result: Result<CapabilitySet, _> = serde_json::from_str(r#"["send","teleport"]"#);
    assert!(result.is_err());
}
