// crates/channel-schema-core/src/schema/message.rs
// ============================================================================
// Module: Channel Message DTO
// Description: Message value handed to the validation engine.
// Purpose: Carry id, endpoints, content, and the property bag of one message.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A channel message is plain data: an identifier, optional sender and
//! receiver endpoints, optional content, and a property bag. The engine only
//! reads it. Property keys are stored verbatim and looked up with ASCII case
//! folding, exactly like connection settings, and an explicit JSON `null`
//! property value reads as absent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::schema::content::MessageContent;
use crate::schema::endpoint::Endpoint;
use crate::schema::identifiers::names_equal;

// ============================================================================
// SECTION: Message Property
// ============================================================================

/// Runtime value attached to one message property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageProperty {
    /// Property value as supplied by the caller.
    pub value: Value,
}

impl MessageProperty {
    /// Wraps a property value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self {
            value,
        }
    }
}

impl From<Value> for MessageProperty {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Channel Message
// ============================================================================

/// One message presented to the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMessage {
    /// Message identifier; must be non-blank to validate.
    pub id: String,
    /// Originating endpoint, when known.
    #[serde(default)]
    pub sender: Option<Endpoint>,
    /// Destination endpoint, when known.
    #[serde(default)]
    pub receiver: Option<Endpoint>,
    /// Message content, when present.
    #[serde(default)]
    pub content: Option<MessageContent>,
    /// Property bag keyed by the caller's property keys.
    #[serde(default)]
    pub properties: BTreeMap<String, MessageProperty>,
}

impl ChannelMessage {
    /// Creates a message with an identifier and nothing else.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: None,
            receiver: None,
            content: None,
            properties: BTreeMap::new(),
        }
    }

    /// Returns this message with a sender endpoint.
    #[must_use]
    pub fn with_sender(mut self, sender: Endpoint) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Returns this message with a receiver endpoint.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Endpoint) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Returns this message with content attached.
    #[must_use]
    pub fn with_content(mut self, content: MessageContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Returns this message with one property set.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), MessageProperty::new(value));
        self
    }

    /// Resolves a property value by name with ASCII case folding.
    ///
    /// A property holding JSON `null` reads as absent.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| names_equal(key, name))
            .map(|(_, property)| &property.value)
            .filter(|value| !value.is_null())
    }

    /// Iterates the raw property entries in key order, including `null`s.
    pub fn property_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(key, property)| (key.as_str(), &property.value))
    }
}
