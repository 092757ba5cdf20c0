//! Handler registry for refract.
//!
//! Maps (entity type, version, kind) to named handler functions:
//! - [`HandlerKey`] / [`HandlerKind`] — the identity a registration claims
//! - [`Representation`] / [`AccessCheck`] / [`Handler`] — named closures that
//!   build raw trees or decide access verdicts
//! - [`RegistryBuilder`] — mutable, startup-only collection phase
//! - [`Registry`] — the sealed, immutable lookup table shared for the
//!   lifetime of the process
//! - [`RegistryError`] — registration conflicts and failed lookups
//!
//! Registration happens once, explicitly, before the first response is
//! served; `RegistryBuilder::seal` is the only way to obtain a [`Registry`],
//! and the sealed registry has no write methods at all.

mod error;
mod handler;
mod key;
mod registry;

pub use error::RegistryError;
pub use handler::{AccessCheck, BuildFn, CheckFn, Handler, Representation};
pub use key::{HandlerKey, HandlerKind};
pub use registry::{Registry, RegistryBuilder};
