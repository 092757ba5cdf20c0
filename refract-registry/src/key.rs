//! Registration identity: what a handler is for and what it is called.

use std::fmt;

/// The two things a handler can be registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// Builds the raw representation tree for an instance.
    Representation,
    /// Decides whether an access key unlocks a guarded field.
    AccessCheck,
}

impl HandlerKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            HandlerKind::Representation => "rep",
            HandlerKind::AccessCheck => "acc",
        }
    }
}

/// The full identity of one registration.
///
/// No two registrations may share a key, and no two handlers of the same
/// kind may share an (entity type, version) slot even under different names.
/// `version: None` is a distinct identifier for version-independent
/// handlers, never a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    pub entity_type: String,
    pub version: Option<u32>,
    pub kind: HandlerKind,
    pub name: String,
}

impl HandlerKey {
    #[must_use]
    pub fn new(
        entity_type: impl Into<String>,
        version: Option<u32>,
        kind: HandlerKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            version,
            kind,
            name: name.into(),
        }
    }

    /// Key for a representation handler.
    #[must_use]
    pub fn representation(
        entity_type: impl Into<String>,
        version: Option<u32>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(entity_type, version, HandlerKind::Representation, name)
    }

    /// Key for an access-check handler.
    #[must_use]
    pub fn access_check(
        entity_type: impl Into<String>,
        version: Option<u32>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(entity_type, version, HandlerKind::AccessCheck, name)
    }
}

/// Renders `user/v2/rep/default` or `user/unversioned/acc/owner`.
impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.entity_type,
            version_label(self.version),
            self.kind.label(),
            self.name
        )
    }
}

/// Diagnostic form of an optional version.
pub(crate) fn version_label(version: Option<u32>) -> String {
    match version {
        Some(v) => format!("v{v}"),
        None => "unversioned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_versioned() {
        let key = HandlerKey::representation("user", Some(2), "default");
        assert_eq!(key.to_string(), "user/v2/rep/default");
    }

    #[test]
    fn display_unversioned_access_check() {
        let key = HandlerKey::access_check("user", None, "owner");
        assert_eq!(key.to_string(), "user/unversioned/acc/owner");
    }

    #[test]
    fn keys_differing_only_in_version_are_distinct() {
        let a = HandlerKey::representation("user", None, "default");
        let b = HandlerKey::representation("user", Some(1), "default");
        assert_ne!(a, b);
    }
}
