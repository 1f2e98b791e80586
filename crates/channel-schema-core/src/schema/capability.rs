// crates/channel-schema-core/src/schema/capability.rs
// ============================================================================
// Module: Channel Capabilities
// Description: Bounded capability flags and the capability set container.
// Purpose: Provide set algebra for schema capability declarations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Capabilities are independent boolean features a channel connector may
//! declare, such as sending, receiving, or batch submission. [`CapabilitySet`]
//! stores them as a bounded bitset behind a typed API: union, intersection,
//! and subset tests are the operations the restriction checker relies on. Raw
//! bit values never appear in the public contract or on the wire; sets
//! serialize as lists of capability tags.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Capability Flags
// ============================================================================

/// One independent feature a channel connector can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelCapability {
    /// Connector can submit outbound messages.
    Send,
    /// Connector can deliver inbound messages.
    Receive,
    /// Connector accepts batched submission of multiple messages.
    Batch,
    /// Connector reports delivery receipts.
    DeliveryReceipt,
    /// Connector reports read receipts.
    ReadReceipt,
    /// Connector carries binary attachments.
    Attachments,
    /// Connector renders provider-side message templates.
    Templates,
    /// Connector accepts a future delivery time.
    Scheduling,
}

impl ChannelCapability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Send,
        Self::Receive,
        Self::Batch,
        Self::DeliveryReceipt,
        Self::ReadReceipt,
        Self::Attachments,
        Self::Templates,
        Self::Scheduling,
    ];

    /// Returns the stable lowercase tag for this capability.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Batch => "batch",
            Self::DeliveryReceipt => "delivery_receipt",
            Self::ReadReceipt => "read_receipt",
            Self::Attachments => "attachments",
            Self::Templates => "templates",
            Self::Scheduling => "scheduling",
        }
    }

    /// Returns the bit assigned to this capability within a set.
    const fn bit(self) -> u16 {
        match self {
            Self::Send => 1 << 0,
            Self::Receive => 1 << 1,
            Self::Batch => 1 << 2,
            Self::DeliveryReceipt => 1 << 3,
            Self::ReadReceipt => 1 << 4,
            Self::Attachments => 1 << 5,
            Self::Templates => 1 << 6,
            Self::Scheduling => 1 << 7,
        }
    }
}

// ============================================================================
// SECTION: Capability Set
// ============================================================================

/// Bounded set of [`ChannelCapability`] flags.
///
/// # Invariants
/// - Only bits assigned to declared capabilities are ever set.
/// - Serialization is the list of member tags in declaration order, so equal
///   sets always serialize identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<ChannelCapability>", from = "Vec<ChannelCapability>")]
pub struct CapabilitySet(u16);

impl CapabilitySet {
    /// Creates an empty capability set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns true when the capability is a member of this set.
    #[must_use]
    pub const fn contains(self, capability: ChannelCapability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Returns this set with one additional capability.
    #[must_use]
    pub const fn with(self, capability: ChannelCapability) -> Self {
        Self(self.0 | capability.bit())
    }

    /// Adds a capability to this set in place.
    pub fn insert(&mut self, capability: ChannelCapability) {
        self.0 |= capability.bit();
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the members of this set absent from `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns true when every member of this set is also a member of `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Returns true when the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of members in the set.
    #[must_use]
    pub fn len(self) -> usize {
        ChannelCapability::ALL
            .iter()
            .filter(|capability| self.contains(**capability))
            .count()
    }

    /// Iterates the members of this set in declaration order.
    pub fn iter(self) -> impl Iterator<Item = ChannelCapability> {
        ChannelCapability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }
}

impl From<Vec<ChannelCapability>> for CapabilitySet {
    fn from(capabilities: Vec<ChannelCapability>) -> Self {
        capabilities.into_iter().collect()
    }
}

impl From<CapabilitySet> for Vec<ChannelCapability> {
    fn from(set: CapabilitySet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<ChannelCapability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = ChannelCapability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}
