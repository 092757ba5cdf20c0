//! Core value model for refract.
//!
//! Defines the types that representation and access-check handlers exchange:
//! - [`Instance`] — a domain object submitted for representation (entity type
//!   plus JSON payload)
//! - [`Node`] — the raw representation tree a handler builds, which may embed
//!   nested instances and guarded fields alongside plain JSON
//! - [`Guarded`] / [`GuardMode`] — a placeholder deferring a field's final
//!   value to an access check evaluated during resolution
//!
//! These types carry no behavior of their own beyond construction and
//! accessors; registration lives in `refract-registry` and resolution in
//! `refract-render`.

mod guard;
mod instance;
mod node;

pub use guard::{GuardMode, Guarded};
pub use instance::Instance;
pub use node::Node;
