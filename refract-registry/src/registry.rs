//! Builder-then-sealed handler registry.
//!
//! Handlers are collected into a [`RegistryBuilder`] during startup and
//! sealed into an immutable [`Registry`]. Lookups are exact matches on
//! (entity type, version, kind); there is no prefix or wildcard matching.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::RegistryError;
use crate::handler::{AccessCheck, Handler, Representation};
use crate::key::{HandlerKey, HandlerKind};

/// Lookup slot. At most one handler may occupy a slot, whatever its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Slot {
    entity_type: String,
    version: Option<u32>,
    kind: HandlerKind,
}

impl Slot {
    fn new(entity_type: &str, version: Option<u32>, kind: HandlerKind) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            version,
            kind,
        }
    }

    fn of_key(key: &HandlerKey) -> Self {
        Self::new(&key.entity_type, key.version, key.kind)
    }
}

struct Registered {
    key: HandlerKey,
    handler: Handler,
}

/// Startup-phase, mutable handler collection.
///
/// Registration methods return `&mut Self` so startup code can chain them
/// with `?`. Once every handler is in, [`RegistryBuilder::seal`] produces
/// the immutable [`Registry`]; there is no way back.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<Slot, Registered>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw registration boundary. The key must agree with the handler's kind
    /// and name; the derived forms below cannot disagree and are the usual
    /// entry points.
    pub fn register(
        &mut self,
        key: HandlerKey,
        handler: Handler,
    ) -> Result<&mut Self, RegistryError> {
        if key.kind != handler.kind() || key.name != handler.name() {
            return Err(RegistryError::KeyMismatch { key });
        }

        let slot = Slot::of_key(&key);
        if let Some(existing) = self.entries.get(&slot) {
            if existing.key == key {
                return Err(RegistryError::DuplicateRegistration { key });
            }
            return Err(RegistryError::AmbiguousRegistration {
                key,
                existing: existing.key.clone(),
            });
        }

        debug!(key = %key, "handler registered");
        self.entries.insert(slot, Registered { key, handler });
        Ok(self)
    }

    /// Registers a representation handler under its own name.
    pub fn representation(
        &mut self,
        entity_type: impl Into<String>,
        version: Option<u32>,
        rep: Representation,
    ) -> Result<&mut Self, RegistryError> {
        let key = HandlerKey::representation(entity_type, version, rep.name());
        self.register(key, Handler::Representation(rep))
    }

    /// Registers an access-check handler under its own name.
    pub fn access_check(
        &mut self,
        entity_type: impl Into<String>,
        version: Option<u32>,
        check: AccessCheck,
    ) -> Result<&mut Self, RegistryError> {
        let key = HandlerKey::access_check(entity_type, version, check.name());
        self.register(key, Handler::AccessCheck(check))
    }

    /// Seals the collection into the immutable registry.
    #[must_use]
    pub fn seal(self) -> Registry {
        let registry = Registry {
            entries: self.entries,
        };
        info!(
            representations = registry.representation_count(),
            access_checks = registry.access_check_count(),
            "registry sealed"
        );
        registry
    }
}

/// Immutable handler registry.
///
/// `Send + Sync`; any number of in-flight responses may read it
/// concurrently, by reference or behind an `Arc`.
pub struct Registry {
    entries: HashMap<Slot, Registered>,
}

impl Registry {
    /// Looks up the representation handler for an entity type and version.
    /// Absence is a programming error for anything being represented.
    pub fn representation(
        &self,
        entity_type: &str,
        version: Option<u32>,
    ) -> Result<&Representation, RegistryError> {
        self.find_representation(entity_type, version)
            .ok_or_else(|| RegistryError::NoRepresentation {
                entity_type: entity_type.to_string(),
                version,
            })
    }

    /// Soft representation lookup, for probing paths where absence is
    /// normal (the response mimetype scan).
    pub fn find_representation(
        &self,
        entity_type: &str,
        version: Option<u32>,
    ) -> Option<&Representation> {
        let slot = Slot::new(entity_type, version, HandlerKind::Representation);
        match self.entries.get(&slot).map(|r| &r.handler) {
            Some(Handler::Representation(rep)) => Some(rep),
            _ => None,
        }
    }

    /// Looks up the access check a guarded field names. A guard referencing
    /// an unregistered check is always a programming error, so there is no
    /// soft form.
    pub fn access_check(
        &self,
        entity_type: &str,
        version: Option<u32>,
    ) -> Result<&AccessCheck, RegistryError> {
        let slot = Slot::new(entity_type, version, HandlerKind::AccessCheck);
        match self.entries.get(&slot).map(|r| &r.handler) {
            Some(Handler::AccessCheck(check)) => Ok(check),
            _ => Err(RegistryError::NoAccessCheck {
                entity_type: entity_type.to_string(),
                version,
            }),
        }
    }

    pub fn representation_count(&self) -> usize {
        self.count_kind(HandlerKind::Representation)
    }

    pub fn access_check_count(&self) -> usize {
        self.count_kind(HandlerKind::AccessCheck)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count_kind(&self, kind: HandlerKind) -> usize {
        self.entries.keys().filter(|slot| slot.kind == kind).count()
    }
}
