//! Resolves named clusters to stable identifiers by walking the control
//! plane's paginated listing.
//!
//! The listing API cannot filter by name server-side, so discovery pushes
//! the state filter to the control plane and matches names client-side, one
//! page at a time, stopping as soon as a definitive answer is known:
//! found-unique, found-none, or found-but-invalid.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod resolver;

pub use error::{Error, Result};
pub use resolver::{CANDIDATE_STATES, ClusterResolver};
