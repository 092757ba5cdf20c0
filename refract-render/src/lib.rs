//! Resolution layer for refract.
//!
//! Takes the raw trees representation handlers build and walks them down to
//! plain JSON:
//! - [`evaluate`] / [`Evaluation`] — settles one guarded field against the
//!   instance that owns it
//! - [`Resolver`] / [`Resolution`] — the recursive depth-first walk that
//!   expands nested instances and drops removed entries
//! - [`ResponseBuilder`] / [`ApiResponse`] — assembles zero or more
//!   instances into a single body with mimetype and status
//! - [`ResolveError`] — response-fatal failures
//!
//! Resolution never produces partial output: any lookup failure, missing
//! verdict, or cyclic expansion aborts the whole response.

mod error;
mod evaluate;
pub mod prelude;
mod resolver;
mod response;

pub use error::ResolveError;
pub use evaluate::{Evaluation, evaluate};
pub use resolver::{Resolution, Resolver};
pub use response::{ApiResponse, DEFAULT_MIMETYPE, ResponseBuilder, STATUS_OK};
