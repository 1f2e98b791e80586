// crates/channel-schema-core/src/validate/mod.rs
// ============================================================================
// Module: Validation Engine
// Description: Pure validation pipelines over schemas, settings, and messages.
// Purpose: Evaluate schema rules deterministically with accumulated results.
// Dependencies: crate::schema, serde_json
// ============================================================================

//! ## Overview
//! Validation modules implement the engine: the type compatibility matrix,
//! the settings and message pipelines, and the compatibility/restriction
//! comparison between schemas. Every function is pure and deterministic; the
//! schema methods on [`crate::ChannelSchema`] call into the same functions,
//! so no alternative code path can drift.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod message;
pub mod restriction;
pub mod result;
pub mod settings;
pub mod typecheck;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use message::validate_message;
pub use restriction::is_compatible_with;
pub use restriction::validate_as_restriction_of;
pub use result::ValidationError;
pub use settings::validate_connection_settings;
pub use typecheck::is_type_compatible;
