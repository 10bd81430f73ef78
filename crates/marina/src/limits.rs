//! Named bounds for the marina record format.
//!
//! These mirror the limits of the reference data files: names and trailer
//! tags have fixed maximum lengths, and the legacy system capped the fleet
//! at a fixed number of boats.

/// Maximum boat name length in characters.
pub const MAX_NAME_LEN: usize = 127;

/// Maximum trailer license tag length in characters.
pub const MAX_TAG_LEN: usize = 31;

/// Number of comma-separated fields in a record line.
pub const FIELD_COUNT: usize = 5;

/// Fleet capacity of the legacy system. Used as the CLI default;
/// the store itself is unbounded unless a capacity is configured.
pub const LEGACY_CAPACITY: usize = 120;
