//! # Transaction
//!
//! `Transaction` is what gets signed; `SignedTransaction` adds the ordered
//! signature list. Neither reorders or deduplicates operations or
//! signatures.
//!
//! ## Digest
//!
//! ```text
//! digest = SHA-256(chain_id || bincode(transaction))
//! id     = SHA-256(bincode(transaction))[0..20]
//! ```

use super::errors::TransactionError;
use ql_01_authority::{Authority, AuthorityEvaluator, AuthorityResolver, SignerSet};
use ql_04_operations::Operation;
use serde::{Deserialize, Serialize};
use shared_crypto::{sha256, sha256_many, CompactSignature, Digest256, PublicKey};
use shared_types::{BlockId, ChainId, TimePointSec};
use std::fmt;
use tracing::warn;

/// First 20 bytes of the SHA-256 of the encoded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub [u8; 20]);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    pub expiration: TimePointSec,
    pub operations: Vec<Operation>,
}

impl Transaction {
    /// Binds the transaction to a recent block for replay protection.
    pub fn set_reference_block(&mut self, block_id: &BlockId) {
        self.ref_block_num = block_id.ref_block_num();
        self.ref_block_prefix = block_id.ref_block_prefix();
    }

    /// Canonical encoding used for hashing and broadcast.
    pub fn encode(&self) -> Result<Vec<u8>, TransactionError> {
        bincode::serialize(self).map_err(|e| TransactionError::Encoding(e.to_string()))
    }

    /// Digest every signature commits to.
    pub fn signature_digest(&self, chain_id: &ChainId) -> Result<Digest256, TransactionError> {
        let encoded = self.encode()?;
        Ok(sha256_many(&[chain_id.as_bytes().as_slice(), encoded.as_slice()]))
    }

    pub fn id(&self) -> Result<TransactionId, TransactionError> {
        let hash = sha256(&self.encode()?);
        let mut id = [0u8; 20];
        id.copy_from_slice(&hash[..20]);
        Ok(TransactionId(id))
    }

    /// Non-empty, bounded, and every operation passes its own check.
    pub fn validate(&self, max_operations: usize) -> Result<(), TransactionError> {
        if self.operations.is_empty() {
            return Err(TransactionError::incomplete("no operations"));
        }
        if self.operations.len() > max_operations {
            return Err(TransactionError::TooManyOperations {
                count: self.operations.len(),
                max: max_operations,
            });
        }
        if !self.expiration.is_set() {
            return Err(TransactionError::InvalidExpiration);
        }
        for operation in &self.operations {
            operation.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    pub signatures: Vec<CompactSignature>,
}

impl SignedTransaction {
    /// Recovers every signer key, in signature order.
    ///
    /// A key that signed more than once is reported once per signature and
    /// logged; it is not removed.
    pub fn signers(&self, chain_id: &ChainId) -> Result<Vec<PublicKey>, TransactionError> {
        let digest = self.transaction.signature_digest(chain_id)?;
        let mut keys: Vec<PublicKey> = Vec::with_capacity(self.signatures.len());
        for signature in &self.signatures {
            let key = signature.recover(&digest)?;
            if keys.contains(&key) {
                warn!(signer = %key, "Duplicate signer in transaction");
            }
            keys.push(key);
        }
        Ok(keys)
    }

    /// Whether the recovered signers satisfy `authority`.
    pub fn satisfies<R: AuthorityResolver + ?Sized>(
        &self,
        chain_id: &ChainId,
        authority: &Authority,
        resolver: &R,
        max_depth: usize,
    ) -> Result<bool, TransactionError> {
        let signers = SignerSet::from_keys(self.signers(chain_id)?);
        let evaluator = AuthorityEvaluator::new(resolver).with_max_depth(max_depth);
        Ok(evaluator.satisfies(authority, &signers)?)
    }

    /// Structural check; does not verify signatures against authorities.
    pub fn validate(
        &self,
        max_operations: usize,
        max_signatures: usize,
    ) -> Result<(), TransactionError> {
        self.transaction.validate(max_operations)?;
        if self.signatures.len() > max_signatures {
            return Err(TransactionError::TooManySignatures {
                count: self.signatures.len(),
                max: max_signatures,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> Result<TransactionId, TransactionError> {
        self.transaction.id()
    }
}
