use crate::Node;

/// What happens to a guarded field when its access check denies.
///
/// A passing check always yields the positive value. `Suppress` and
/// `ExcludeEntry` both remove the containing entry on denial; they stay
/// separate modes so call sites read as "show or omit" versus "exclude this
/// element", mirroring how guards are written in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardMode {
    /// Denial omits the field's key/value entirely — shown only when
    /// permitted.
    Suppress,
    /// Denial deletes the containing entry or element.
    ExcludeEntry,
    /// Denial substitutes the alternative value.
    ReplaceWithAlternative,
}

/// A placeholder embedded in a representation tree in place of a value,
/// deferring the field to an access check evaluated during resolution.
///
/// The owner type names which registered access check decides the field; the
/// instance the check runs against is the one whose representation contains
/// this node. Guards are immutable once built and consumed by resolution —
/// they never survive into output.
#[derive(Debug, Clone, PartialEq)]
pub struct Guarded {
    mode: GuardMode,
    owner_type: String,
    version: Option<u32>,
    access_key: String,
    value: Box<Node>,
    alternative: Option<Box<Node>>,
}

impl Guarded {
    /// Builds a guard with an explicit mode. The alternative is kept only
    /// for [`GuardMode::ReplaceWithAlternative`].
    pub fn new(
        mode: GuardMode,
        owner_type: impl Into<String>,
        version: Option<u32>,
        access_key: impl Into<String>,
        value: Node,
        alternative: Option<Node>,
    ) -> Self {
        Self {
            mode,
            owner_type: owner_type.into(),
            version,
            access_key: access_key.into(),
            value: Box::new(value),
            alternative: match mode {
                GuardMode::ReplaceWithAlternative => alternative.map(Box::new),
                _ => None,
            },
        }
    }

    /// Field shown only when the access check passes; omitted otherwise.
    pub fn suppress(
        owner_type: impl Into<String>,
        version: Option<u32>,
        access_key: impl Into<String>,
        value: impl Into<Node>,
    ) -> Node {
        Node::Guarded(Self::new(
            GuardMode::Suppress,
            owner_type,
            version,
            access_key,
            value.into(),
            None,
        ))
    }

    /// Entry deleted from its container when the access check denies.
    pub fn exclude(
        owner_type: impl Into<String>,
        version: Option<u32>,
        access_key: impl Into<String>,
        value: impl Into<Node>,
    ) -> Node {
        Node::Guarded(Self::new(
            GuardMode::ExcludeEntry,
            owner_type,
            version,
            access_key,
            value.into(),
            None,
        ))
    }

    /// Alternative value substituted when the access check denies. The
    /// alternative may itself contain further guards or instances.
    pub fn replace(
        owner_type: impl Into<String>,
        version: Option<u32>,
        access_key: impl Into<String>,
        value: impl Into<Node>,
        alternative: impl Into<Node>,
    ) -> Node {
        Node::Guarded(Self::new(
            GuardMode::ReplaceWithAlternative,
            owner_type,
            version,
            access_key,
            value.into(),
            Some(alternative.into()),
        ))
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    pub fn owner_type(&self) -> &str {
        &self.owner_type
    }

    /// Version of the access check this guard resolves through — the
    /// version stated where the guard was built, independent of the version
    /// a response is being rendered under.
    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// Opaque key handed to the access check; the core never inspects it.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn alternative(&self) -> Option<&Node> {
        self.alternative.as_deref()
    }

    /// Consumes the guard into its positive value and alternative.
    pub fn into_parts(self) -> (Node, Option<Node>) {
        (*self.value, self.alternative.map(|a| *a))
    }
}
