//! Error types for record decoding and fleet commands.

use thiserror::Error;

use crate::model::LocationKind;

/// Error decoding a record line.
///
/// Any of these rejects the whole line; no partial record is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("boat name is empty")]
    EmptyName,

    #[error("boat name length {len} exceeds maximum {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("invalid boat length: {value:?}")]
    InvalidLength { value: String },

    #[error("unknown location kind: {value:?}")]
    UnknownLocationKind { value: String },

    #[error("invalid {kind} detail: {value:?}")]
    InvalidDetail { kind: LocationKind, value: String },

    #[error("location detail is empty")]
    EmptyDetail,

    #[error("invalid amount owed: {value:?}")]
    InvalidAmount { value: String },
}

/// Error from a fleet command.
///
/// Every variant is locally recoverable: the command performs no mutation
/// and the caller's loop continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] DecodeError),

    #[error("no boat named {name:?}")]
    NotFound { name: String },

    #[error("fleet is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("payment exceeds amount owed, ${balance:.2}")]
    PaymentExceedsBalance { balance: f64 },
}
