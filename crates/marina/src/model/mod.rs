//! Data model types for marina records.
//!
//! - [`LocationKind`]: where a boat is kept
//! - [`LocationDetail`]: the kind-specific payload describing the exact spot
//! - [`Boat`]: one vessel under management, with billing state

pub mod boat;
pub mod location;

pub use boat::Boat;
pub use location::{LocationDetail, LocationKind};
