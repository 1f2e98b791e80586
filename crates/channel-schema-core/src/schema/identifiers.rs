// crates/channel-schema-core/src/schema/identifiers.rs
// ============================================================================
// Module: Channel Schema Identifiers
// Description: Strongly typed identifier strings for schemas and connectors.
// Purpose: Provide serializable name types with case-insensitive equality.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout the
//! channel schema model. Declared strings are stored and rendered verbatim;
//! equality and hashing fold ASCII case so that lookups and the schema
//! compatibility relation never depend on an author's capitalization. The one
//! exception is [`ConnectorId`], which models a runtime type identity and
//! compares verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Case Folding
// ============================================================================

/// Compares two names using ASCII case folding.
///
/// This is the single comparison rule applied to every declared name in the
/// model: identity triples, parameter and property names, and authentication
/// field names.
#[must_use]
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Hashes a name with the same ASCII fold used by [`names_equal`].
///
/// Keeps `Hash` consistent with the folded `PartialEq` on the identifier
/// types: strings equal under the fold hash identically.
fn hash_folded<H: Hasher>(name: &str, state: &mut H) {
    for byte in name.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Provider segment of a schema identity, such as `twilio` or `sendgrid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelProvider(String);

impl ChannelProvider {
    /// Creates a new channel provider name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the declared string verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a raw candidate name with ASCII case folding.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        names_equal(&self.0, candidate)
    }
}

impl PartialEq for ChannelProvider {
    fn eq(&self, other: &Self) -> bool {
        names_equal(&self.0, &other.0)
    }
}

impl Eq for ChannelProvider {}

impl Hash for ChannelProvider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl fmt::Display for ChannelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ChannelProvider {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChannelProvider {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Channel type segment of a schema identity, such as `sms` or `email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelType(String);

impl ChannelType {
    /// Creates a new channel type name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the declared string verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a raw candidate name with ASCII case folding.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        names_equal(&self.0, candidate)
    }
}

impl PartialEq for ChannelType {
    fn eq(&self, other: &Self) -> bool {
        names_equal(&self.0, &other.0)
    }
}

impl Eq for ChannelType {}

impl Hash for ChannelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ChannelType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChannelType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Version segment of a schema identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Creates a new schema version.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the declared string verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a raw candidate version with ASCII case folding.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        names_equal(&self.0, candidate)
    }
}

impl PartialEq for SchemaVersion {
    fn eq(&self, other: &Self) -> bool {
        names_equal(&self.0, &other.0)
    }
}

impl Eq for SchemaVersion {}

impl Hash for SchemaVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SchemaVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SchemaVersion {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Declared name of a parameter, message property, or credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new field name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the declared string verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a raw candidate name with ASCII case folding.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        names_equal(&self.0, candidate)
    }
}

impl PartialEq for FieldName {
    fn eq(&self, other: &Self) -> bool {
        names_equal(&self.0, &other.0)
    }
}

impl Eq for FieldName {}

impl Hash for FieldName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FieldName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Runtime identity of a connector implementation.
///
/// Unlike the declared names above, connector identities are produced by the
/// host platform rather than by schema authors, and compare verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorId(String);

impl ConnectorId {
    /// Creates a new connector identity.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ConnectorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ConnectorId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
