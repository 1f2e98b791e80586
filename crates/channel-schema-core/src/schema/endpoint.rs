// crates/channel-schema-core/src/schema/endpoint.rs
// ============================================================================
// Module: Endpoint Model
// Description: Endpoint kinds, directional endpoint specs, and the endpoint DTO.
// Purpose: Declare which endpoint kinds a schema accepts and in which direction.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An endpoint spec declares one endpoint kind a connector handles and whether
//! it may appear as a sender, a receiver, or both. The [`EndpointKind::Any`]
//! wildcard matches every concrete kind, letting a schema accept arbitrary
//! addressing while still constraining direction. A schema that declares no
//! endpoint specs makes no statement, and endpoint validation is skipped
//! entirely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Endpoint Kinds
// ============================================================================

/// Kind of address an endpoint carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// Wildcard matching every concrete kind.
    Any,
    /// E.164 or national phone number.
    PhoneNumber,
    /// Carrier short code.
    ShortCode,
    /// Email address.
    Email,
    /// Platform-scoped user identifier.
    UserId,
    /// Platform-scoped group or room identifier.
    GroupId,
    /// HTTP callback target.
    Webhook,
    /// Push notification device token.
    DeviceToken,
}

impl EndpointKind {
    /// Returns the stable lowercase tag for this endpoint kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::PhoneNumber => "phone_number",
            Self::ShortCode => "short_code",
            Self::Email => "email",
            Self::UserId => "user_id",
            Self::GroupId => "group_id",
            Self::Webhook => "webhook",
            Self::DeviceToken => "device_token",
        }
    }
}

// ============================================================================
// SECTION: Endpoint Spec
// ============================================================================

/// Declaration that a schema accepts one endpoint kind, with direction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Accepted endpoint kind, possibly the wildcard.
    pub kind: EndpointKind,
    /// Endpoints of this kind may originate messages.
    pub can_send: bool,
    /// Endpoints of this kind may receive messages.
    pub can_receive: bool,
}

impl EndpointSpec {
    /// Creates an endpoint spec with explicit direction flags.
    #[must_use]
    pub const fn new(kind: EndpointKind, can_send: bool, can_receive: bool) -> Self {
        Self {
            kind,
            can_send,
            can_receive,
        }
    }

    /// Creates a spec accepting the kind in both directions.
    #[must_use]
    pub const fn bidirectional(kind: EndpointKind) -> Self {
        Self::new(kind, true, true)
    }

    /// Creates a spec accepting the kind for sending only.
    #[must_use]
    pub const fn send_only(kind: EndpointKind) -> Self {
        Self::new(kind, true, false)
    }

    /// Creates a spec accepting the kind for receiving only.
    #[must_use]
    pub const fn receive_only(kind: EndpointKind) -> Self {
        Self::new(kind, false, true)
    }

    /// Returns true when this spec covers the candidate kind.
    ///
    /// The wildcard covers everything; a concrete kind covers only itself.
    #[must_use]
    pub fn matches(&self, candidate: EndpointKind) -> bool {
        self.kind == EndpointKind::Any || self.kind == candidate
    }
}

// ============================================================================
// SECTION: Endpoint DTO
// ============================================================================

/// Concrete endpoint attached to a message as sender or receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Kind of address carried.
    pub kind: EndpointKind,
    /// Address literal, such as a phone number or email address.
    pub address: String,
}

impl Endpoint {
    /// Creates a new endpoint from a kind and address literal.
    #[must_use]
    pub fn new(kind: EndpointKind, address: impl Into<String>) -> Self {
        Self {
            kind,
            address: address.into(),
        }
    }
}
