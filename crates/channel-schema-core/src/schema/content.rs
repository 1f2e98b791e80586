// crates/channel-schema-core/src/schema/content.rs
// ============================================================================
// Module: Message Content Model
// Description: Closed content-kind tags and the message content variants.
// Purpose: Provide one exhaustive content classification for validation.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Content support is declared on a schema as a list of [`ContentKind`] tags
//! and carried on a message as one [`MessageContent`] variant. The two sides
//! meet in [`MessageContent::kind`], the single exhaustive conversion the
//! validation engine uses for membership checks. There is no open-ended
//! content registry: adding a kind means adding a variant here and a tag
//! there, and the compiler enforces that every variant classifies itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Content Kinds
// ============================================================================

/// Classification tag for one kind of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Plain text body.
    Text,
    /// HTML body.
    Html,
    /// Provider-side template reference with substitution parameters.
    Template,
    /// Composite content holding multiple parts.
    Multipart,
    /// Structured JSON payload.
    Json,
    /// Opaque binary payload.
    Binary,
    /// Hosted media reference.
    Media,
}

impl ContentKind {
    /// Returns the stable lowercase tag for this content kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Template => "template",
            Self::Multipart => "multipart",
            Self::Json => "json",
            Self::Binary => "binary",
            Self::Media => "media",
        }
    }
}

// ============================================================================
// SECTION: Content Variants
// ============================================================================

/// Message content carried by a [`crate::ChannelMessage`].
///
/// One variant per [`ContentKind`]; the pairing is total in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MessageContent {
    /// Plain text body.
    Text {
        /// Text body.
        body: String,
    },
    /// HTML body.
    Html {
        /// Markup body.
        body: String,
    },
    /// Provider-side template reference.
    Template {
        /// Template identifier known to the provider.
        template_id: String,
        /// Substitution parameters applied by the provider.
        #[serde(default)]
        parameters: BTreeMap<String, String>,
    },
    /// Composite content holding multiple parts.
    Multipart {
        /// Ordered component parts.
        parts: Vec<MessageContent>,
    },
    /// Structured JSON payload.
    Json {
        /// Payload value.
        value: Value,
    },
    /// Opaque binary payload.
    Binary {
        /// Raw bytes.
        data: Vec<u8>,
        /// Optional MIME type describing the bytes.
        #[serde(default)]
        media_type: Option<String>,
    },
    /// Hosted media reference.
    Media {
        /// Location of the hosted asset.
        url: String,
        /// MIME type of the asset.
        media_type: String,
    },
}

impl MessageContent {
    /// Classifies this content under its [`ContentKind`] tag.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text { .. } => ContentKind::Text,
            Self::Html { .. } => ContentKind::Html,
            Self::Template { .. } => ContentKind::Template,
            Self::Multipart { .. } => ContentKind::Multipart,
            Self::Json { .. } => ContentKind::Json,
            Self::Binary { .. } => ContentKind::Binary,
            Self::Media { .. } => ContentKind::Media,
        }
    }

    /// Creates plain text content.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text {
            body: body.into(),
        }
    }

    /// Creates HTML content.
    #[must_use]
    pub fn html(body: impl Into<String>) -> Self {
        Self::Html {
            body: body.into(),
        }
    }

    /// Creates template content with substitution parameters.
    #[must_use]
    pub fn template(
        template_id: impl Into<String>,
        parameters: BTreeMap<String, String>,
    ) -> Self {
        Self::Template {
            template_id: template_id.into(),
            parameters,
        }
    }

    /// Creates multipart content from ordered parts.
    #[must_use]
    pub fn multipart(parts: Vec<Self>) -> Self {
        Self::Multipart {
            parts,
        }
    }

    /// Creates structured JSON content.
    #[must_use]
    pub fn json(value: Value) -> Self {
        Self::Json {
            value,
        }
    }

    /// Creates binary content with an optional MIME type.
    #[must_use]
    pub fn binary(data: Vec<u8>, media_type: Option<String>) -> Self {
        Self::Binary {
            data,
            media_type,
        }
    }

    /// Creates hosted media content.
    #[must_use]
    pub fn media(url: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self::Media {
            url: url.into(),
            media_type: media_type.into(),
        }
    }
}
