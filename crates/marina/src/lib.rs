//! Marina record management: boat records, the CSV-line codec, and the
//! name-sorted fleet store.
//!
//! This crate is the core of the marina billing tool. It tracks boats,
//! where they are kept, and what they owe, persisting state as a flat
//! comma-delimited text file between runs.
//!
//! # Overview
//!
//! The system is deliberately small and single-user:
//! - **Line-oriented format**: one boat per line, five fixed fields
//! - **Sorted store**: the fleet stays name-sorted after every mutation
//! - **Recoverable errors**: no command failure ever halts the caller's loop
//!
//! # Quick Start
//!
//! ```rust
//! use marina::codec::{decode_boat, encode_boat};
//! use marina::ops;
//! use marina::{Fleet, LocationDetail};
//!
//! // Decode a record line
//! let boat = decode_boat("Big Brother,20,slip,27,1450.00").unwrap();
//! assert_eq!(boat.location, LocationDetail::Slip(27));
//!
//! // Build a fleet and bill a month
//! let mut fleet = Fleet::new();
//! fleet.insert(boat).unwrap();
//! ops::apply_monthly_charge(&mut fleet);
//! assert_eq!(fleet.get(0).unwrap().amount_owed, 1700.0);
//!
//! // Encode back to a line
//! let line = encode_boat(fleet.get(0).unwrap());
//! assert_eq!(line, "Big Brother,20,slip,27,1700.00");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Boat, LocationKind, LocationDetail)
//! - [`codec`]: Record-line decoding/encoding with a legacy compat mode
//! - [`store`]: The fleet collection and its file load/save boundary
//! - [`ops`]: The menu commands (list, add, remove, payment, monthly charge)
//! - [`error`]: Error types
//! - [`limits`]: Format bounds
//!
//! # File Format
//!
//! UTF-8 text, one record per line, no header, no comma escaping:
//!
//! ```text
//! name,length,kind,detail,amount
//! ```
//!
//! A missing file loads as an empty fleet; undecodable lines are skipped.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod ops;
pub mod store;

// Re-export commonly used types at crate root
pub use codec::{decode_boat, decode_boat_with_options, encode_boat, DecodeOptions};
pub use error::{CommandError, DecodeError};
pub use model::{Boat, LocationDetail, LocationKind};
pub use store::Fleet;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
