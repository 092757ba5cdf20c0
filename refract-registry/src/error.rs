//! Registration and lookup failures.

use thiserror::Error;

use crate::key::{HandlerKey, version_label};

/// Errors raised while registering handlers or looking them up.
///
/// Registration variants are startup-fatal: the registry refuses the
/// conflicting handler and keeps what it already holds. Lookup variants are
/// response-fatal: a missing handler aborts the response that needed it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The exact key was registered before. The first registration stays.
    #[error("duplicate handler registration: {key}")]
    DuplicateRegistration { key: HandlerKey },

    /// A handler with a different name already occupies the same
    /// (entity type, version, kind) slot, so lookups could not pick one.
    #[error("ambiguous registration: {key} collides with already registered {existing}")]
    AmbiguousRegistration {
        key: HandlerKey,
        existing: HandlerKey,
    },

    /// The key handed to the raw `register` boundary disagrees with the
    /// supplied handler's kind or name.
    #[error("registration key {key} does not match the supplied handler")]
    KeyMismatch { key: HandlerKey },

    /// No representation handler for the requested entity type and version.
    #[error("no representation handler for {entity_type}/{}", version_label(*.version))]
    NoRepresentation {
        entity_type: String,
        version: Option<u32>,
    },

    /// A guard names an entity type and version with no access check.
    #[error("no access-check handler for {entity_type}/{}", version_label(*.version))]
    NoAccessCheck {
        entity_type: String,
        version: Option<u32>,
    },
}
