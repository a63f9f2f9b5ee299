//! # Error Types
//!
//! Errors raised while constructing or combining chain value types.

use crate::entities::AssetId;
use thiserror::Error;

/// Errors produced by the shared value types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypesError {
    /// Text could not be parsed as `space.type.instance`.
    #[error("Malformed object id: {0}")]
    MalformedObjectId(String),

    /// Object id does not belong to the expected space/type.
    #[error("Object {actual} is not of type {expected_space}.{expected_type}.x")]
    WrongObjectType {
        expected_space: u8,
        expected_type: u8,
        actual: String,
    },

    /// Arithmetic would leave the u64 range (including going negative).
    #[error("Amount overflow")]
    AmountOverflow,

    /// Two amounts of different assets were combined.
    #[error("Asset mismatch: {left} vs {right}")]
    AssetMismatch { left: AssetId, right: AssetId },

    /// Price with a zero side or the same asset on both sides with unequal amounts.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Hex identifier had the wrong length or alphabet.
    #[error("Malformed identifier: expected {expected} bytes of hex")]
    MalformedIdentifier { expected: usize },
}
