// crates/channel-schema-core/src/schema/descriptor.rs
// ============================================================================
// Module: Connector Descriptor
// Description: Pairing of a connector identity with its channel schema.
// Purpose: Expose capability and support queries keyed by connector identity.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A connector descriptor is the façade the host platform registers for each
//! connector: the connector's runtime identity plus the schema it declared.
//! Every query helper delegates to the held schema. Equality and hashing are
//! defined by the connector identity alone, so two descriptors for the same
//! connector collapse to one registry entry regardless of schema contents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;

use crate::schema::authentication::AuthenticationType;
use crate::schema::capability::CapabilitySet;
use crate::schema::capability::ChannelCapability;
use crate::schema::channel::ChannelSchema;
use crate::schema::content::ContentKind;
use crate::schema::endpoint::EndpointKind;
use crate::schema::identifiers::ChannelProvider;
use crate::schema::identifiers::ChannelType;
use crate::schema::identifiers::ConnectorId;

// ============================================================================
// SECTION: Connector Descriptor
// ============================================================================

/// One registered connector: runtime identity plus declared schema.
///
/// # Invariants
/// - Equality and hashing consider only `connector`; the schema is carried
///   data, not identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorDescriptor {
    /// Runtime identity of the connector implementation.
    pub connector: ConnectorId,
    /// Schema the connector declared at registration.
    pub schema: ChannelSchema,
}

impl ConnectorDescriptor {
    /// Creates a descriptor for a connector and its schema.
    #[must_use]
    pub fn new(connector: impl Into<ConnectorId>, schema: ChannelSchema) -> Self {
        Self {
            connector: connector.into(),
            schema,
        }
    }

    /// Returns the display label, falling back to the connector identity.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.schema
            .display_name
            .as_deref()
            .unwrap_or_else(|| self.connector.as_str())
    }

    /// Returns the provider segment of the schema identity.
    #[must_use]
    pub fn channel_provider(&self) -> &ChannelProvider {
        &self.schema.channel_provider
    }

    /// Returns the channel type segment of the schema identity.
    #[must_use]
    pub fn channel_type(&self) -> &ChannelType {
        &self.schema.channel_type
    }

    /// Returns the declared capability set.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        self.schema.capabilities
    }

    /// Returns true when the schema declares the capability.
    #[must_use]
    pub fn supports_capability(&self, capability: ChannelCapability) -> bool {
        self.schema.supports_capability(capability)
    }

    /// Returns true when the schema declares any capability in the set.
    #[must_use]
    pub fn supports_any_capability(&self, capabilities: CapabilitySet) -> bool {
        !self.schema.capabilities.intersection(capabilities).is_empty()
    }

    /// Returns true when the schema declares every capability in the set.
    #[must_use]
    pub fn supports_all_capabilities(&self, capabilities: CapabilitySet) -> bool {
        capabilities.is_subset_of(self.schema.capabilities)
    }

    /// Returns true when the schema declares the content kind.
    #[must_use]
    pub fn supports_content_type(&self, kind: ContentKind) -> bool {
        self.schema.supports_content_type(kind)
    }

    /// Returns true when some endpoint spec covers the kind.
    #[must_use]
    pub fn supports_endpoint_kind(&self, kind: EndpointKind) -> bool {
        self.schema.supports_endpoint_kind(kind)
    }

    /// Returns true when some configuration declares the authentication type.
    #[must_use]
    pub fn supports_authentication_type(&self, auth_type: AuthenticationType) -> bool {
        self.schema.supports_authentication_type(auth_type)
    }
}

impl PartialEq for ConnectorDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.connector == other.connector
    }
}

impl Eq for ConnectorDescriptor {}

impl Hash for ConnectorDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.connector.hash(state);
    }
}
