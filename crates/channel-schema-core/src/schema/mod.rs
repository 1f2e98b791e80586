// crates/channel-schema-core/src/schema/mod.rs
// ============================================================================
// Module: Channel Schema Model
// Description: Declarative schema types and message/settings DTOs.
// Purpose: Provide stable, serializable types describing connector surfaces.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Schema modules define the declarative model: identity names, capability
//! flags, value specs, authentication configurations, the schema aggregate,
//! and the plain data carriers handed to the validation engine. These types
//! are the canonical source of truth for any derived surface such as the
//! offline CLI.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod authentication;
pub mod capability;
pub mod channel;
pub mod content;
pub mod descriptor;
pub mod endpoint;
pub mod identifiers;
pub mod message;
pub mod parameter;
pub mod property;
pub mod settings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use authentication::AuthenticationConfig;
pub use authentication::AuthenticationType;
pub use authentication::FieldGroup;
pub use capability::CapabilitySet;
pub use capability::ChannelCapability;
pub use channel::ChannelSchema;
pub use channel::ChannelSchemaBuilder;
pub use channel::SchemaError;
pub use content::ContentKind;
pub use content::MessageContent;
pub use descriptor::ConnectorDescriptor;
pub use endpoint::Endpoint;
pub use endpoint::EndpointKind;
pub use endpoint::EndpointSpec;
pub use identifiers::ChannelProvider;
pub use identifiers::ChannelType;
pub use identifiers::ConnectorId;
pub use identifiers::FieldName;
pub use identifiers::SchemaVersion;
pub use identifiers::names_equal;
pub use message::ChannelMessage;
pub use message::MessageProperty;
pub use parameter::ParameterSpec;
pub use parameter::ParameterType;
pub use property::MessagePropertySpec;
pub use property::PropertyConstraint;
pub use settings::ConnectionSettings;
