//! Location types: where a boat is kept, and the spot-specific payload.

use std::fmt;

/// Where a boat is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Slip,
    Land,
    Trailer,
    Storage,
}

impl LocationKind {
    /// Parses a kind from its record-file name, case-insensitively.
    ///
    /// Only the four canonical names are accepted; permissive handling of
    /// unrecognized tokens is a codec concern, not a model one.
    pub fn parse_name(s: &str) -> Option<LocationKind> {
        if s.eq_ignore_ascii_case("slip") {
            Some(LocationKind::Slip)
        } else if s.eq_ignore_ascii_case("land") {
            Some(LocationKind::Land)
        } else if s.eq_ignore_ascii_case("trailer") {
            Some(LocationKind::Trailer)
        } else if s.eq_ignore_ascii_case("storage") {
            Some(LocationKind::Storage)
        } else {
            None
        }
    }

    /// Returns the canonical lowercase name used in record files.
    pub fn name(self) -> &'static str {
        match self {
            LocationKind::Slip => "slip",
            LocationKind::Land => "land",
            LocationKind::Trailer => "trailer",
            LocationKind::Storage => "storage",
        }
    }

    /// Monthly charge per foot of boat length, in currency units.
    pub fn monthly_rate(self) -> f64 {
        match self {
            LocationKind::Slip => 12.50,
            LocationKind::Land => 14.00,
            LocationKind::Trailer => 25.00,
            LocationKind::Storage => 11.20,
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind-specific payload describing the exact spot.
///
/// Exactly one payload shape exists per [`LocationKind`]; the variant *is*
/// the kind, so reading the wrong payload for the current kind is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationDetail {
    /// Slip number at the dock.
    Slip(u32),
    /// Bay letter for land storage.
    Land(char),
    /// Trailer license tag (at most 31 characters).
    Trailer(String),
    /// Numbered storage slot.
    Storage(u32),
}

impl LocationDetail {
    /// Returns the kind this detail belongs to.
    pub fn kind(&self) -> LocationKind {
        match self {
            LocationDetail::Slip(_) => LocationKind::Slip,
            LocationDetail::Land(_) => LocationKind::Land,
            LocationDetail::Trailer(_) => LocationKind::Trailer,
            LocationDetail::Storage(_) => LocationKind::Storage,
        }
    }
}

impl fmt::Display for LocationDetail {
    /// Renders the payload as it appears in the detail field of a record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationDetail::Slip(n) => write!(f, "{n}"),
            LocationDetail::Land(c) => write!(f, "{c}"),
            LocationDetail::Trailer(tag) => f.write_str(tag),
            LocationDetail::Storage(n) => write!(f, "{n}"),
        }
    }
}
