// crates/channel-schema-core/src/lib.rs
// ============================================================================
// Module: Channel Schema Core Library
// Description: Public API surface for the channel schema engine.
// Purpose: Expose the schema model and validation entry points.
// Dependencies: crate::{schema, validate}
// ============================================================================

//! ## Overview
//! Channel schema core describes what a channel connector supports and
//! mechanically checks configurations, messages, and other schemas against
//! that description. The engine is a pure, synchronous decision layer: every
//! validation call reads immutable inputs, allocates only its local result
//! accumulator, and returns a complete list of violations where the empty
//! list is the sole success signal. Schemas are built once, validated, and
//! shared freely across threads.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schema;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use schema::AuthenticationConfig;
pub use schema::AuthenticationType;
pub use schema::CapabilitySet;
pub use schema::ChannelCapability;
pub use schema::ChannelMessage;
pub use schema::ChannelProvider;
pub use schema::ChannelSchema;
pub use schema::ChannelSchemaBuilder;
pub use schema::ChannelType;
pub use schema::ConnectionSettings;
pub use schema::ConnectorDescriptor;
pub use schema::ConnectorId;
pub use schema::ContentKind;
pub use schema::Endpoint;
pub use schema::EndpointKind;
pub use schema::EndpointSpec;
pub use schema::FieldGroup;
pub use schema::FieldName;
pub use schema::MessageContent;
pub use schema::MessageProperty;
pub use schema::MessagePropertySpec;
pub use schema::ParameterSpec;
pub use schema::ParameterType;
pub use schema::PropertyConstraint;
pub use schema::SchemaError;
pub use schema::SchemaVersion;
pub use validate::ValidationError;
pub use validate::is_compatible_with;
pub use validate::is_type_compatible;
pub use validate::validate_as_restriction_of;
pub use validate::validate_connection_settings;
pub use validate::validate_message;
