//! Access evaluation for guarded fields.

use refract_model::{GuardMode, Guarded, Instance, Node};
use refract_registry::Registry;

use crate::error::ResolveError;

/// What becomes of a guarded field once its access check has spoken.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Keep this node. It may itself need further resolution: alternatives
    /// can carry nested guards and instances of their own.
    Keep(Node),
    /// Drop the containing map entry or sequence element entirely.
    Remove,
}

/// Settles one guarded field against the instance that owns it.
///
/// The access check is looked up under the guard's own entity type and
/// version (the version baked in when the guard was built, not the request
/// version) and invoked with the owning instance and the guard's access
/// key. Verdicts never get cached: access may depend on the instance.
pub fn evaluate(
    registry: &Registry,
    guarded: Guarded,
    owner: &Instance,
) -> Result<Evaluation, ResolveError> {
    let check = registry.access_check(guarded.owner_type(), guarded.version())?;

    let granted = check
        .check(owner, guarded.access_key())
        .map_err(|message| ResolveError::InvalidAccessVerdict {
            entity_type: guarded.owner_type().to_string(),
            version: guarded.version(),
            name: check.name().to_string(),
            access_key: guarded.access_key().to_string(),
            message,
        })?;

    let mode = guarded.mode();
    let (value, alternative) = guarded.into_parts();

    if granted {
        return Ok(Evaluation::Keep(value));
    }
    match mode {
        GuardMode::Suppress | GuardMode::ExcludeEntry => Ok(Evaluation::Remove),
        GuardMode::ReplaceWithAlternative => {
            Ok(Evaluation::Keep(alternative.unwrap_or_else(Node::null)))
        }
    }
}
