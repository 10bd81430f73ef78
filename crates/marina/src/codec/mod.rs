//! Line codec for the marina record file.
//!
//! One record per line, five comma-separated fields in fixed order:
//!
//! ```text
//! name,length,kind,detail,amount
//! Big Brother,20,slip,27,1450.00
//! ```
//!
//! There is no escaping mechanism: names containing a comma are unsupported.
//! Decoding is strict by default; [`DecodeOptions::legacy`] reproduces the
//! permissive behavior of the reference system for old data files.

use crate::error::DecodeError;
use crate::limits::{FIELD_COUNT, MAX_NAME_LEN, MAX_TAG_LEN};
use crate::model::{Boat, LocationDetail, LocationKind};

/// Options controlling how strictly record lines are decoded.
///
/// The default is strict: unknown location kinds and malformed detail tokens
/// reject the line. Legacy mode follows the reference parser instead:
/// unrecognized kinds fall back to `slip`, unparseable slip/storage numbers
/// fall back to `0`, over-long names are truncated, and the historical
/// misspelling `trailor` is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    legacy: bool,
}

impl DecodeOptions {
    /// Strict decoding (the default).
    pub fn strict() -> Self {
        Self { legacy: false }
    }

    /// Permissive decoding for data files written by the reference system.
    ///
    /// This keeps the reference parser's fallbacks (see the type docs); it
    /// does not chase its every quirk — the canonical `trailer` spelling is
    /// accepted here too, and a negative slip or storage number becomes 0
    /// rather than a negative count.
    pub fn legacy() -> Self {
        Self { legacy: true }
    }

    /// Returns true if legacy fallbacks are enabled.
    pub fn is_legacy(&self) -> bool {
        self.legacy
    }
}

/// Decodes a record line into a [`Boat`] with strict rules.
pub fn decode_boat(line: &str) -> Result<Boat, DecodeError> {
    decode_boat_with_options(line, &DecodeOptions::strict())
}

/// Decodes a record line into a [`Boat`].
///
/// A failure on any field rejects the whole line; no partial record is
/// produced.
pub fn decode_boat_with_options(
    line: &str,
    options: &DecodeOptions,
) -> Result<Boat, DecodeError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    // Only leading whitespace before the name and whitespace around the
    // numeric fields is skipped, as in the reference parser; trailing
    // whitespace in the name and the detail field is significant.
    let name = decode_name(fields[0].trim_start(), options)?;

    let length_field = fields[1].trim();
    let length: i32 = length_field
        .parse()
        .map_err(|_| DecodeError::InvalidLength {
            value: length_field.to_string(),
        })?;

    let kind = decode_kind(fields[2], options)?;
    let location = decode_detail(kind, fields[3], options)?;

    let amount_field = fields[4].trim();
    let amount_owed: f64 = amount_field
        .parse()
        .map_err(|_| DecodeError::InvalidAmount {
            value: amount_field.to_string(),
        })?;

    Ok(Boat {
        name,
        length,
        location,
        amount_owed,
    })
}

/// Encodes a [`Boat`] as a record line (without trailing newline).
///
/// The amount is rendered with exactly two decimal digits, so
/// `decode_boat(&encode_boat(b))` reproduces `b` field-for-field for any
/// boat whose amount carries at most two decimals.
pub fn encode_boat(boat: &Boat) -> String {
    format!(
        "{},{},{},{},{:.2}",
        boat.name,
        boat.length,
        boat.kind(),
        boat.location,
        boat.amount_owed
    )
}

fn decode_name(field: &str, options: &DecodeOptions) -> Result<String, DecodeError> {
    if field.is_empty() {
        return Err(DecodeError::EmptyName);
    }
    let len = field.chars().count();
    if len > MAX_NAME_LEN {
        if options.is_legacy() {
            return Ok(field.chars().take(MAX_NAME_LEN).collect());
        }
        return Err(DecodeError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(field.to_string())
}

fn decode_kind(field: &str, options: &DecodeOptions) -> Result<LocationKind, DecodeError> {
    if let Some(kind) = LocationKind::parse_name(field) {
        return Ok(kind);
    }
    if options.is_legacy() {
        // Reference data files spell the kind "trailor"; everything else
        // falls back to a slip.
        if field.eq_ignore_ascii_case("trailor") {
            return Ok(LocationKind::Trailer);
        }
        return Ok(LocationKind::Slip);
    }
    Err(DecodeError::UnknownLocationKind {
        value: field.to_string(),
    })
}

fn decode_detail(
    kind: LocationKind,
    field: &str,
    options: &DecodeOptions,
) -> Result<LocationDetail, DecodeError> {
    if field.is_empty() {
        return Err(DecodeError::EmptyDetail);
    }
    match kind {
        LocationKind::Slip => Ok(LocationDetail::Slip(decode_number(kind, field, options)?)),
        LocationKind::Storage => Ok(LocationDetail::Storage(decode_number(kind, field, options)?)),
        LocationKind::Land => {
            let mut chars = field.chars();
            let letter = chars.next().ok_or(DecodeError::EmptyDetail)?;
            if chars.next().is_some() && !options.is_legacy() {
                return Err(DecodeError::InvalidDetail {
                    kind,
                    value: field.to_string(),
                });
            }
            Ok(LocationDetail::Land(letter))
        }
        LocationKind::Trailer => {
            // Tags are truncated to the format limit in both modes.
            let tag: String = field.chars().take(MAX_TAG_LEN).collect();
            Ok(LocationDetail::Trailer(tag))
        }
    }
}

fn decode_number(
    kind: LocationKind,
    field: &str,
    options: &DecodeOptions,
) -> Result<u32, DecodeError> {
    match field.parse() {
        Ok(n) => Ok(n),
        Err(_) if options.is_legacy() => Ok(0),
        Err(_) => Err(DecodeError::InvalidDetail {
            kind,
            value: field.to_string(),
        }),
    }
}
