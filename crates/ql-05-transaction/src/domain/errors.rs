//! # Transaction Errors

use crate::ports::outbound::GatewayError;
use ql_01_authority::AuthorityError;
use ql_02_fee_schedule::FeeError;
use ql_04_operations::OperationError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while assembling, signing or submitting a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// A required step has not happened yet
    #[error("Incomplete transaction: {reason}")]
    IncompleteTransaction { reason: &'static str },

    /// The transaction is signed; its digest must not change
    #[error("Transaction is signed and can no longer be modified")]
    FrozenTransaction,

    #[error("Too many operations: {count} (max {max})")]
    TooManyOperations { count: usize, max: usize },

    #[error("Too many signatures: {count} (max {max})")]
    TooManySignatures { count: usize, max: usize },

    /// Expiration is unset or cannot be represented
    #[error("Invalid expiration")]
    InvalidExpiration,

    /// Canonical encoding failed
    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Fee error: {0}")]
    Fee(#[from] FeeError),

    #[error("Authority error: {0}")]
    Authority(#[from] AuthorityError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Chain query or broadcast failed; passed through unchanged
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl TransactionError {
    pub(crate) fn incomplete(reason: &'static str) -> Self {
        Self::IncompleteTransaction { reason }
    }
}
