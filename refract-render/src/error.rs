//! Resolution failures. All of them abort the whole response.

use refract_registry::RegistryError;
use thiserror::Error;

/// Errors raised while resolving a tree or assembling a response.
///
/// None of these are recoverable mid-response: partial output would mask
/// broken access-control wiring, so resolution stops at the first failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A handler lookup failed during resolution.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An access check produced no verdict. The response fails loudly and
    /// names the handler instead of assuming a default.
    #[error(
        "access check '{name}' for {entity_type}/{} gave no verdict on key '{access_key}': {message}",
        version_label(*.version)
    )]
    InvalidAccessVerdict {
        entity_type: String,
        version: Option<u32>,
        name: String,
        access_key: String,
        message: String,
    },

    /// A representation embedded an instance that is already being
    /// expanded further up the same walk.
    #[error("cyclic representation: '{entity_type}' embeds itself")]
    CyclicRepresentation { entity_type: String },
}

fn version_label(version: Option<u32>) -> String {
    match version {
        Some(v) => format!("v{v}"),
        None => "unversioned".to_string(),
    }
}
