// crates/channel-schema-core/src/schema/channel.rs
// ============================================================================
// Module: Channel Schema
// Description: Aggregate schema describing one channel connector's surface.
// Purpose: Hold identity, capabilities, and specs, and front the engine.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A channel schema aggregates everything a connector declares about itself:
//! the identity triple (provider, channel type, version), a capability set,
//! parameter and message-property specs, supported content kinds, endpoint
//! specs, and authentication configurations. Schemas are built once, checked
//! by [`ChannelSchema::validate`], and treated as read-only afterwards; every
//! engine operation borrows the schema immutably, so concurrent validation
//! against one instance needs no coordination.
//!
//! The identity triple is the sole key for schema compatibility and compares
//! with ASCII case folding, while [`ChannelSchema::logical_identity`] renders
//! the declared strings verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::schema::authentication::AuthenticationConfig;
use crate::schema::authentication::AuthenticationType;
use crate::schema::authentication::FieldGroup;
use crate::schema::capability::CapabilitySet;
use crate::schema::capability::ChannelCapability;
use crate::schema::content::ContentKind;
use crate::schema::endpoint::EndpointKind;
use crate::schema::endpoint::EndpointSpec;
use crate::schema::identifiers::ChannelProvider;
use crate::schema::identifiers::ChannelType;
use crate::schema::identifiers::SchemaVersion;
use crate::schema::message::ChannelMessage;
use crate::schema::parameter::ParameterSpec;
use crate::schema::property::MessagePropertySpec;
use crate::schema::settings::ConnectionSettings;
use crate::validate::message::validate_message;
use crate::validate::restriction::is_compatible_with;
use crate::validate::restriction::validate_as_restriction_of;
use crate::validate::result::ValidationError;
use crate::validate::settings::validate_connection_settings;

// ============================================================================
// SECTION: Channel Schema
// ============================================================================

/// Declarative description of what one channel connector supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSchema {
    /// Provider segment of the schema identity.
    pub channel_provider: ChannelProvider,
    /// Channel type segment of the schema identity.
    pub channel_type: ChannelType,
    /// Version segment of the schema identity.
    pub version: SchemaVersion,
    /// Human-readable connector label.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Capability flags the connector declares.
    #[serde(default)]
    pub capabilities: CapabilitySet,
    /// Connection parameters, names unique under case folding.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Supported content kinds; empty means no statement.
    #[serde(default)]
    pub content_types: Vec<ContentKind>,
    /// Accepted endpoint kinds with direction flags; empty means no statement.
    #[serde(default)]
    pub endpoints: Vec<EndpointSpec>,
    /// Supported authentication methods; empty means no statement.
    #[serde(default)]
    pub authentication: Vec<AuthenticationConfig>,
    /// Message properties, names unique under case folding.
    #[serde(default)]
    pub message_properties: Vec<MessagePropertySpec>,
    /// When true, undeclared configuration or message fields are violations.
    #[serde(default)]
    pub strict: bool,
}

impl ChannelSchema {
    /// Creates a minimal schema carrying only its identity triple.
    #[must_use]
    pub fn new(
        channel_provider: impl Into<ChannelProvider>,
        channel_type: impl Into<ChannelType>,
        version: impl Into<SchemaVersion>,
    ) -> Self {
        Self {
            channel_provider: channel_provider.into(),
            channel_type: channel_type.into(),
            version: version.into(),
            display_name: None,
            capabilities: CapabilitySet::empty(),
            parameters: Vec::new(),
            content_types: Vec::new(),
            endpoints: Vec::new(),
            authentication: Vec::new(),
            message_properties: Vec::new(),
            strict: false,
        }
    }

    /// Starts a fluent builder seeded with the identity triple.
    #[must_use]
    pub fn builder(
        channel_provider: impl Into<ChannelProvider>,
        channel_type: impl Into<ChannelType>,
        version: impl Into<SchemaVersion>,
    ) -> ChannelSchemaBuilder {
        ChannelSchemaBuilder {
            schema: Self::new(channel_provider, channel_type, version),
        }
    }

    /// Validates the schema's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the identity is blank, declared names
    /// collide under case folding, or an authentication configuration is
    /// malformed.
    pub fn validate(&self) -> Result<(), SchemaError> {
        ensure_identity_present(self)?;
        ensure_unique_parameter_names(&self.parameters)?;
        ensure_unique_property_names(&self.message_properties)?;
        ensure_authentication_well_formed(&self.authentication)?;
        Ok(())
    }

    /// Renders the identity triple verbatim as `provider/type/version`.
    #[must_use]
    pub fn logical_identity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.channel_provider.as_str(),
            self.channel_type.as_str(),
            self.version.as_str(),
        )
    }

    /// Returns the distinct declared authentication types in declaration order.
    ///
    /// This is the read-only projection callers use when only the coarse
    /// method matters; the configurations remain the single source of truth.
    #[must_use]
    pub fn authentication_types(&self) -> Vec<AuthenticationType> {
        let mut types: Vec<AuthenticationType> = Vec::new();
        for config in &self.authentication {
            if !types.contains(&config.auth_type) {
                types.push(config.auth_type);
            }
        }
        types
    }

    /// Finds a parameter spec by name with ASCII case folding.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|spec| spec.name.matches(name))
    }

    /// Finds a message-property spec by name with ASCII case folding.
    #[must_use]
    pub fn message_property(&self, name: &str) -> Option<&MessagePropertySpec> {
        self.message_properties
            .iter()
            .find(|spec| spec.name.matches(name))
    }

    /// Returns true when the schema declares the capability.
    #[must_use]
    pub fn supports_capability(&self, capability: ChannelCapability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns true when the schema declares the content kind.
    #[must_use]
    pub fn supports_content_type(&self, kind: ContentKind) -> bool {
        self.content_types.contains(&kind)
    }

    /// Returns true when some endpoint spec covers the kind, wildcard included.
    #[must_use]
    pub fn supports_endpoint_kind(&self, kind: EndpointKind) -> bool {
        self.endpoints.iter().any(|spec| spec.matches(kind))
    }

    /// Returns true when some configuration declares the authentication type.
    #[must_use]
    pub fn supports_authentication_type(&self, auth_type: AuthenticationType) -> bool {
        self.authentication
            .iter()
            .any(|config| config.auth_type == auth_type)
    }

    /// Validates connection settings against this schema.
    ///
    /// Runs the full pipeline: required presence, type and allowed-value
    /// constraints, authentication satisfaction, and the strict unknown-key
    /// pass. All passes run regardless of earlier failures; an empty result
    /// is the sole success signal.
    #[must_use]
    pub fn validate_connection_settings(
        &self,
        settings: &ConnectionSettings,
    ) -> Vec<ValidationError> {
        validate_connection_settings(self, settings)
    }

    /// Validates a message against this schema.
    ///
    /// Checks identifier, endpoints, content kind, and message properties,
    /// accumulating every violation.
    #[must_use]
    pub fn validate_message(&self, message: &ChannelMessage) -> Vec<ValidationError> {
        validate_message(self, message)
    }

    /// Returns true when both schemas share one identity under case folding.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        is_compatible_with(self, other)
    }

    /// Validates that this schema is a safe, narrower view of `parent`.
    ///
    /// An identity mismatch yields exactly one error and no subset checks;
    /// otherwise every subset violation accumulates.
    #[must_use]
    pub fn validate_as_restriction_of(&self, parent: &Self) -> Vec<ValidationError> {
        validate_as_restriction_of(self, parent)
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Fluent builder assembling a [`ChannelSchema`] before validation.
#[derive(Debug, Clone)]
pub struct ChannelSchemaBuilder {
    /// Schema under construction.
    schema: ChannelSchema,
}

impl ChannelSchemaBuilder {
    /// Sets the human-readable connector label.
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.schema.display_name = Some(display_name.into());
        self
    }

    /// Adds one capability flag.
    #[must_use]
    pub fn capability(mut self, capability: ChannelCapability) -> Self {
        self.schema.capabilities.insert(capability);
        self
    }

    /// Merges a whole capability set.
    #[must_use]
    pub fn capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.schema.capabilities = self.schema.capabilities.union(capabilities);
        self
    }

    /// Adds one parameter spec.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.schema.parameters.push(parameter);
        self
    }

    /// Adds one supported content kind.
    #[must_use]
    pub fn content_type(mut self, kind: ContentKind) -> Self {
        self.schema.content_types.push(kind);
        self
    }

    /// Adds one endpoint spec.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointSpec) -> Self {
        self.schema.endpoints.push(endpoint);
        self
    }

    /// Adds one authentication configuration.
    #[must_use]
    pub fn authentication(mut self, config: AuthenticationConfig) -> Self {
        self.schema.authentication.push(config);
        self
    }

    /// Adds one message-property spec.
    #[must_use]
    pub fn message_property(mut self, property: MessagePropertySpec) -> Self {
        self.schema.message_properties.push(property);
        self
    }

    /// Sets the strict-mode flag.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.schema.strict = strict;
        self
    }

    /// Validates the assembled schema and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when [`ChannelSchema::validate`] rejects the
    /// assembled schema.
    pub fn build(self) -> Result<ChannelSchema, SchemaError> {
        self.schema.validate()?;
        Ok(self.schema)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Channel schema validation errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Provider segment is blank.
    #[error("schema channel provider must not be blank")]
    EmptyProvider,
    /// Channel type segment is blank.
    #[error("schema channel type must not be blank")]
    EmptyChannelType,
    /// Version segment is blank.
    #[error("schema version must not be blank")]
    EmptyVersion,
    /// Two parameter specs share a name under case folding.
    #[error("duplicate parameter name: {0}")]
    DuplicateParameter(String),
    /// Two message-property specs share a name under case folding.
    #[error("duplicate message property name: {0}")]
    DuplicateProperty(String),
    /// Non-open configuration declares no field groups.
    #[error("authentication configuration {0} declares no field groups")]
    MissingFieldGroups(String),
    /// Configuration declares a field group with no fields.
    #[error("authentication configuration {0} declares an empty field group")]
    EmptyFieldGroup(String),
    /// Open configuration declares field groups it can never evaluate.
    #[error("authentication configuration {0} is open but declares field groups")]
    UnexpectedFieldGroups(String),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures every identity segment carries non-blank text.
fn ensure_identity_present(schema: &ChannelSchema) -> Result<(), SchemaError> {
    if schema.channel_provider.as_str().trim().is_empty() {
        return Err(SchemaError::EmptyProvider);
    }
    if schema.channel_type.as_str().trim().is_empty() {
        return Err(SchemaError::EmptyChannelType);
    }
    if schema.version.as_str().trim().is_empty() {
        return Err(SchemaError::EmptyVersion);
    }
    Ok(())
}

/// Ensures parameter names are unique under case folding.
fn ensure_unique_parameter_names(parameters: &[ParameterSpec]) -> Result<(), SchemaError> {
    for (index, spec) in parameters.iter().enumerate() {
        if parameters
            .iter()
            .skip(index + 1)
            .any(|other| other.name == spec.name)
        {
            return Err(SchemaError::DuplicateParameter(spec.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures message-property names are unique under case folding.
fn ensure_unique_property_names(
    properties: &[MessagePropertySpec],
) -> Result<(), SchemaError> {
    for (index, spec) in properties.iter().enumerate() {
        if properties
            .iter()
            .skip(index + 1)
            .any(|other| other.name == spec.name)
        {
            return Err(SchemaError::DuplicateProperty(spec.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures each authentication configuration matches its type's shape.
///
/// A `None` configuration declares no groups; any other type declares at
/// least one group, and no group may be empty.
fn ensure_authentication_well_formed(
    configs: &[AuthenticationConfig],
) -> Result<(), SchemaError> {
    for config in configs {
        if config.auth_type == AuthenticationType::None {
            if !config.field_groups.is_empty() {
                return Err(SchemaError::UnexpectedFieldGroups(
                    config.display_name.clone(),
                ));
            }
            continue;
        }
        if config.field_groups.is_empty() {
            return Err(SchemaError::MissingFieldGroups(config.display_name.clone()));
        }
        if config.field_groups.iter().any(FieldGroup::is_empty) {
            return Err(SchemaError::EmptyFieldGroup(config.display_name.clone()));
        }
    }
    Ok(())
}
