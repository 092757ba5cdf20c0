//! Handler wrappers: named closures plus the metadata lookups need.

use refract_model::{Instance, Node};

use crate::key::HandlerKind;

/// Builds the raw representation tree for one instance.
pub type BuildFn = dyn Fn(&Instance) -> Node + Send + Sync;

/// Decides whether an access key unlocks guarded fields of an instance.
///
/// `Ok(true)` grants, `Ok(false)` denies. `Err` means the check produced no
/// verdict at all; resolution fails the whole response and names the handler
/// rather than guessing a default.
pub type CheckFn = dyn Fn(&Instance, &str) -> Result<bool, String> + Send + Sync;

/// A named representation handler, optionally declaring the mimetype
/// responses built from it should be served under.
pub struct Representation {
    name: String,
    mimetype: Option<String>,
    build: Box<BuildFn>,
}

impl Representation {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        build: impl Fn(&Instance) -> Node + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            mimetype: None,
            build: Box::new(build),
        }
    }

    /// Declares a mimetype override for responses built from this handler.
    #[must_use]
    pub fn with_mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    /// Runs the handler, producing the raw (unresolved) tree.
    pub fn build(&self, instance: &Instance) -> Node {
        (self.build)(instance)
    }
}

/// A named access-check handler.
pub struct AccessCheck {
    name: String,
    check: Box<CheckFn>,
}

impl AccessCheck {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&Instance, &str) -> Result<bool, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the check against the instance owning the guarded field.
    pub fn check(&self, instance: &Instance, access_key: &str) -> Result<bool, String> {
        (self.check)(instance, access_key)
    }
}

/// Either kind of registrable handler.
pub enum Handler {
    Representation(Representation),
    AccessCheck(AccessCheck),
}

impl Handler {
    pub fn kind(&self) -> HandlerKind {
        match self {
            Handler::Representation(_) => HandlerKind::Representation,
            Handler::AccessCheck(_) => HandlerKind::AccessCheck,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Handler::Representation(rep) => rep.name(),
            Handler::AccessCheck(check) => check.name(),
        }
    }
}

impl From<Representation> for Handler {
    fn from(rep: Representation) -> Self {
        Handler::Representation(rep)
    }
}

impl From<AccessCheck> for Handler {
    fn from(check: AccessCheck) -> Self {
        Handler::AccessCheck(check)
    }
}
