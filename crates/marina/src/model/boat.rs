//! The boat record.

use crate::model::{LocationDetail, LocationKind};

/// One vessel under management.
///
/// Names are limited to 127 characters and must not contain a comma (the
/// record-file field delimiter); the codec enforces both. Uniqueness of
/// names is a convention, not an invariant: duplicates are permitted and
/// lookup finds the first match only.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    /// Boat name, used as the lookup key (case-insensitive).
    pub name: String,
    /// Length in feet.
    pub length: i32,
    /// Where the boat is kept, with the spot-specific payload.
    pub location: LocationDetail,
    /// Outstanding balance in currency units.
    pub amount_owed: f64,
}

impl Boat {
    /// Creates a boat record.
    pub fn new(
        name: impl Into<String>,
        length: i32,
        location: LocationDetail,
        amount_owed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            length,
            location,
            amount_owed,
        }
    }

    /// Returns where this boat is kept.
    pub fn kind(&self) -> LocationKind {
        self.location.kind()
    }
}
