//! # Fee Errors

use shared_types::{OperationKind, TypesError};
use thiserror::Error;

/// Errors raised while computing an operation fee.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeeError {
    /// The fee table has no entry for this kind
    #[error("No fee parameters for operation kind {0}")]
    UnknownOperationKind(OperationKind),

    /// Scaling or price conversion failed
    #[error("Fee conversion failed: {0}")]
    Conversion(#[from] TypesError),
}
