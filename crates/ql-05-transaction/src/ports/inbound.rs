//! Inbound (Driving) ports for the Transaction subsystem.

use crate::domain::{SignedTransaction, TransactionError};
use ql_04_operations::Operation;
use shared_crypto::CompactSigner;

/// Build-sign-broadcast entry point used by higher layers.
pub trait TransactionApi {
    /// Assembles `operations` against the current chain state, signs with
    /// every signer in order, validates and returns the result without
    /// broadcasting.
    fn prepare(
        &self,
        operations: Vec<Operation>,
        signers: &[&dyn CompactSigner],
    ) -> Result<SignedTransaction, TransactionError>;

    /// [`prepare`](Self::prepare) followed by broadcast.
    fn submit(
        &self,
        operations: Vec<Operation>,
        signers: &[&dyn CompactSigner],
    ) -> Result<SignedTransaction, TransactionError>;
}
