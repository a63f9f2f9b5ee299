//! # Registrar Errors

use ql_01_authority::AuthorityError;
use ql_04_operations::OperationError;
use ql_05_transaction::{GatewayError, TransactionError};
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised by brain-key handling and account registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error("Brain key is empty")]
    EmptyBrainKey,

    #[error("Unknown registrar account: {0}")]
    UnknownRegistrar(String),

    /// The registrar exists but is not controlled by this wallet
    #[error("Registrar {0} is not an account of this wallet")]
    RegistrarNotOwned(String),

    /// The signing key does not satisfy the registrar's active authority
    #[error("Signer does not satisfy the active authority of {0}")]
    SignerNotAuthorized(String),

    #[error("Account name already registered: {0}")]
    NameTaken(String),

    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Wallet error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Authority error: {0}")]
    Authority(#[from] AuthorityError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
