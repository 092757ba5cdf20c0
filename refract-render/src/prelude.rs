//! One-stop imports for building and serving representations.
//!
//! ```
//! use refract_render::prelude::*;
//! ```

pub use refract_model::{GuardMode, Guarded, Instance, Node};
pub use refract_registry::{
    AccessCheck, Handler, HandlerKey, HandlerKind, Registry, RegistryBuilder, RegistryError,
    Representation,
};

pub use crate::error::ResolveError;
pub use crate::evaluate::{Evaluation, evaluate};
pub use crate::resolver::{Resolution, Resolver};
pub use crate::response::{ApiResponse, DEFAULT_MIMETYPE, ResponseBuilder, STATUS_OK};
