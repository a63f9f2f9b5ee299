//! # Operation Errors

use ql_01_authority::AuthorityError;
use ql_03_memo::MemoError;
use thiserror::Error;

/// Errors raised while building or validating an operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// Amount is zero or denominated in a disallowed asset
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// Account name fails the local shape check
    #[error("Malformed account name {name:?}: {reason}")]
    MalformedName { name: String, reason: &'static str },

    /// A messaging payload has nobody to deliver to
    #[error("Message payload has no receivers")]
    EmptyReceivers,

    /// Receiver object is not an account or content, or equals the sender
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    /// Custom operation data could not be encoded or decoded
    #[error("Invalid custom payload: {0}")]
    Payload(String),

    #[error("Authority error: {0}")]
    Authority(#[from] AuthorityError),

    #[error("Memo error: {0}")]
    Memo(#[from] MemoError),
}

impl OperationError {
    pub(crate) fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }
}
