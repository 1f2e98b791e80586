// crates/channel-schema-core/src/schema/authentication.rs
// ============================================================================
// Module: Authentication Configurations
// Description: Declarative authentication methods and field-group requirements.
// Purpose: Decide whether settings satisfy at least one credential alternative.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An authentication configuration names one method a connector supports and
//! the alternative credential field groups that satisfy it. Satisfaction is
//! OR across field groups and AND within a group, with short-circuit on the
//! first satisfied group: Basic, for example, is satisfied by a complete
//! `username` + `password` pair or a complete `account_sid` + `auth_token`
//! pair, never by half of each.
//!
//! Security posture: this module decides whether credential fields are
//! present, never whether they are valid. Field values are not read beyond
//! the presence check and never appear in validation messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::schema::identifiers::FieldName;
use crate::schema::settings::ConnectionSettings;
use crate::validate::result::ValidationError;
use crate::validate::result::comma_list;

// ============================================================================
// SECTION: Authentication Types
// ============================================================================

/// Authentication method supported by a channel connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationType {
    /// Explicitly open channel requiring no credentials.
    None,
    /// Username-and-password style credential pairs.
    Basic,
    /// Single API key field.
    ApiKey,
    /// Bearer or access token field.
    Token,
    /// OAuth2 client-credentials pair.
    ClientCredentials,
    /// Client certificate material or path.
    Certificate,
    /// Connector-specific method with caller-declared field groups.
    Custom,
}

impl AuthenticationType {
    /// Returns the stable lowercase tag for this authentication type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::ApiKey => "api_key",
            Self::Token => "token",
            Self::ClientCredentials => "client_credentials",
            Self::Certificate => "certificate",
            Self::Custom => "custom",
        }
    }
}

// ============================================================================
// SECTION: Field Groups
// ============================================================================

/// One credential alternative: a set of field names required together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldGroup {
    /// Fields that must all be supplied for this alternative to hold.
    pub fields: Vec<FieldName>,
}

impl FieldGroup {
    /// Creates a field group from field names.
    #[must_use]
    pub fn of<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when every field in the group is supplied.
    #[must_use]
    pub fn is_satisfied_by(&self, settings: &ConnectionSettings) -> bool {
        self.fields
            .iter()
            .all(|field| field_supplied(settings, field))
    }

    /// Renders the group as a `+`-joined field list for messages.
    #[must_use]
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self.fields.iter().map(FieldName::as_str).collect();
        names.join(" + ")
    }

    /// Returns true when the group declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Returns true when the settings supply a usable value for the field.
///
/// `null` reads as absent, and a string of only whitespace does not count as
/// a supplied credential.
fn field_supplied(settings: &ConnectionSettings, field: &FieldName) -> bool {
    match settings.parameter(field.as_str()) {
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(_) => true,
        None => false,
    }
}

// ============================================================================
// SECTION: Authentication Config
// ============================================================================

/// One authentication method plus its alternative field-group requirements.
///
/// # Invariants
/// - A configuration whose type is not [`AuthenticationType::None`] declares
///   at least one non-empty field group; a `None` configuration declares
///   none. [`crate::ChannelSchema::validate`] enforces this at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationConfig {
    /// Method this configuration describes.
    pub auth_type: AuthenticationType,
    /// Human-readable label used in validation messages.
    pub display_name: String,
    /// Alternative credential field groups; any one satisfies the method.
    #[serde(default)]
    pub field_groups: Vec<FieldGroup>,
}

impl AuthenticationConfig {
    /// Creates the explicitly open configuration.
    #[must_use]
    pub fn none() -> Self {
        Self {
            auth_type: AuthenticationType::None,
            display_name: "no authentication".to_owned(),
            field_groups: Vec::new(),
        }
    }

    /// Creates a Basic configuration with the conventional credential pairs.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            auth_type: AuthenticationType::Basic,
            display_name: "basic credentials".to_owned(),
            field_groups: vec![
                FieldGroup::of(["username", "password"]),
                FieldGroup::of(["account_sid", "auth_token"]),
                FieldGroup::of(["user", "pass"]),
                FieldGroup::of(["client_id", "client_secret"]),
            ],
        }
    }

    /// Creates an API-key configuration with the conventional key fields.
    #[must_use]
    pub fn api_key() -> Self {
        Self {
            auth_type: AuthenticationType::ApiKey,
            display_name: "API key".to_owned(),
            field_groups: vec![
                FieldGroup::of(["api_key"]),
                FieldGroup::of(["key"]),
                FieldGroup::of(["access_key"]),
            ],
        }
    }

    /// Creates a token configuration with the conventional token fields.
    #[must_use]
    pub fn token() -> Self {
        Self {
            auth_type: AuthenticationType::Token,
            display_name: "access token".to_owned(),
            field_groups: vec![
                FieldGroup::of(["token"]),
                FieldGroup::of(["access_token"]),
                FieldGroup::of(["bearer_token"]),
            ],
        }
    }

    /// Creates an OAuth2 client-credentials configuration.
    #[must_use]
    pub fn client_credentials() -> Self {
        Self {
            auth_type: AuthenticationType::ClientCredentials,
            display_name: "client credentials".to_owned(),
            field_groups: vec![FieldGroup::of(["client_id", "client_secret"])],
        }
    }

    /// Creates a client-certificate configuration.
    #[must_use]
    pub fn certificate() -> Self {
        Self {
            auth_type: AuthenticationType::Certificate,
            display_name: "client certificate".to_owned(),
            field_groups: vec![
                FieldGroup::of(["certificate"]),
                FieldGroup::of(["certificate_path"]),
            ],
        }
    }

    /// Creates a connector-specific configuration with caller-declared groups.
    #[must_use]
    pub fn custom(display_name: impl Into<String>, field_groups: Vec<FieldGroup>) -> Self {
        Self {
            auth_type: AuthenticationType::Custom,
            display_name: display_name.into(),
            field_groups,
        }
    }

    /// Replaces the display label.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Replaces the field-group alternatives.
    #[must_use]
    pub fn with_field_groups(mut self, field_groups: Vec<FieldGroup>) -> Self {
        self.field_groups = field_groups;
        self
    }

    /// Returns true when the settings satisfy this configuration.
    ///
    /// OR across field groups with short-circuit on the first satisfied
    /// group; a `None` configuration is always satisfied.
    #[must_use]
    pub fn is_satisfied_by(&self, settings: &ConnectionSettings) -> bool {
        if self.auth_type == AuthenticationType::None {
            return true;
        }
        self.field_groups
            .iter()
            .any(|group| group.is_satisfied_by(settings))
    }

    /// Explains why this configuration is unsatisfied, or returns nothing.
    pub fn validate(&self, settings: &ConnectionSettings) -> Vec<ValidationError> {
        if self.is_satisfied_by(settings) {
            return Vec::new();
        }
        let alternatives: Vec<String> = self
            .field_groups
            .iter()
            .map(FieldGroup::describe)
            .collect();
        let message = format!(
            "{} requires one of: {}",
            self.display_name,
            comma_list(alternatives.iter().map(String::as_str)),
        );
        vec![ValidationError::new(message)]
    }

    /// Enumerates every field name referenced by any group, deduplicated.
    ///
    /// This is the whitelist the strict unknown-key pass consults.
    #[must_use]
    pub fn field_names(&self) -> Vec<FieldName> {
        let mut names: Vec<FieldName> = Vec::new();
        for group in &self.field_groups {
            for field in &group.fields {
                if !names.contains(field) {
                    names.push(field.clone());
                }
            }
        }
        names
    }
}
