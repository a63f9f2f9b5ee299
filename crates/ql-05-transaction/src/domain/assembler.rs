//! # Transaction Assembler
//!
//! Runtime state machine around a [`Transaction`] being built.
//!
//! ```text
//! [Empty] ──add──→ [Built] ──compute_fees──→ [Feed] ──sign──→ [Signed] ──validate──→ [Validated]
//!                     ↑                         │                │  ↑                    │
//!                     └───────── add ───────────┘                │  └──────── sign ──────┘
//!                                                                └── add → FrozenTransaction
//! ```
//!
//! Adding an operation after fees were computed drops back to `Built`; the
//! new operation has no fee yet. Once a signature exists the transaction is
//! frozen, since any change would invalidate it.

use super::config::AssemblerConfig;
use super::errors::TransactionError;
use super::transaction::{SignedTransaction, Transaction};
use ql_02_fee_schedule::FeeSchedule;
use ql_04_operations::Operation;
use shared_crypto::{CompactSignature, CompactSigner, PublicKey};
use shared_types::{BlockId, ChainId, Price, TimePointSec};
use std::fmt;
use tracing::{debug, info, warn};

/// Lifecycle of an assembled transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssemblerState {
    #[default]
    Empty,
    /// Operations attached, fees not (or no longer) computed.
    Built,
    /// Every operation carries its fee.
    Feed,
    /// At least one signature attached.
    Signed,
    Validated,
}

impl AssemblerState {
    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::Signed | Self::Validated)
    }
}

impl fmt::Display for AssemblerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Built => "built",
            Self::Feed => "feed",
            Self::Signed => "signed",
            Self::Validated => "validated",
        };
        f.write_str(name)
    }
}

/// Builds, prices, signs and validates one transaction.
///
/// Owned by a single call path; not meant for concurrent use.
#[derive(Debug, Clone)]
pub struct TransactionAssembler {
    config: AssemblerConfig,
    transaction: Transaction,
    signatures: Vec<CompactSignature>,
    signer_keys: Vec<PublicKey>,
    reference_set: bool,
    state: AssemblerState,
}

impl Default for TransactionAssembler {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}

impl TransactionAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self {
            config,
            transaction: Transaction::default(),
            signatures: Vec::new(),
            signer_keys: Vec::new(),
            reference_set: false,
            state: AssemblerState::Empty,
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn signatures(&self) -> &[CompactSignature] {
        &self.signatures
    }

    fn ensure_mutable(&self) -> Result<(), TransactionError> {
        if self.state.is_frozen() {
            return Err(TransactionError::FrozenTransaction);
        }
        Ok(())
    }

    fn transition(&mut self, next: AssemblerState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "Assembler state transition");
            self.state = next;
        }
    }

    /// Appends an operation, keeping insertion order.
    ///
    /// # Errors
    ///
    /// - `FrozenTransaction` once signed
    /// - `TooManyOperations` past the configured bound
    pub fn add_operation(&mut self, operation: Operation) -> Result<(), TransactionError> {
        self.ensure_mutable()?;
        let count = self.transaction.operations.len() + 1;
        if count > self.config.max_operations {
            return Err(TransactionError::TooManyOperations {
                count,
                max: self.config.max_operations,
            });
        }
        self.transaction.operations.push(operation);
        self.transition(AssemblerState::Built);
        Ok(())
    }

    pub fn set_reference_block(&mut self, block_id: &BlockId) -> Result<(), TransactionError> {
        self.ensure_mutable()?;
        self.transaction.set_reference_block(block_id);
        self.reference_set = true;
        Ok(())
    }

    /// Sets an absolute expiration. Only `> 0` is enforced here; keeping
    /// it in the near future is up to the caller.
    pub fn set_expiration(&mut self, expiration: TimePointSec) -> Result<(), TransactionError> {
        self.ensure_mutable()?;
        if !expiration.is_set() {
            return Err(TransactionError::InvalidExpiration);
        }
        self.transaction.expiration = expiration;
        Ok(())
    }

    /// Sets expiration to `now` plus the configured window.
    pub fn expire_after(&mut self, now: TimePointSec) -> Result<(), TransactionError> {
        let expiration = now
            .checked_add_secs(self.config.expiration_window_secs)
            .ok_or(TransactionError::InvalidExpiration)?;
        self.set_expiration(expiration)
    }

    /// Computes and attaches the fee of every operation.
    pub fn compute_fees(
        &mut self,
        schedule: &FeeSchedule,
        price: &Price,
    ) -> Result<(), TransactionError> {
        self.ensure_mutable()?;
        if self.transaction.operations.is_empty() {
            return Err(TransactionError::incomplete("no operations"));
        }
        for operation in &mut self.transaction.operations {
            schedule.set_fee(operation, price)?;
        }
        self.transition(AssemblerState::Feed);
        Ok(())
    }

    /// Signature over the current digest, without attaching it.
    pub fn calculate_signature<S: CompactSigner + ?Sized>(
        &self,
        signer: &S,
        chain_id: &ChainId,
    ) -> Result<CompactSignature, TransactionError> {
        match self.state {
            AssemblerState::Empty | AssemblerState::Built => {
                return Err(TransactionError::incomplete("fees not computed"));
            }
            AssemblerState::Feed | AssemblerState::Signed | AssemblerState::Validated => {}
        }
        if !self.reference_set {
            return Err(TransactionError::incomplete("reference block not set"));
        }
        if !self.transaction.expiration.is_set() {
            return Err(TransactionError::incomplete("expiration not set"));
        }

        let digest = self.transaction.signature_digest(chain_id)?;
        Ok(signer.sign_compact(&digest)?)
    }

    /// Signs and appends the signature. Further calls add more signatures.
    ///
    /// Signing twice with the same key appends a second signature; this is
    /// logged, not rejected.
    pub fn sign<S: CompactSigner + ?Sized>(
        &mut self,
        signer: &S,
        chain_id: &ChainId,
    ) -> Result<&CompactSignature, TransactionError> {
        let count = self.signatures.len() + 1;
        if count > self.config.max_signatures {
            return Err(TransactionError::TooManySignatures {
                count,
                max: self.config.max_signatures,
            });
        }

        let signature = self.calculate_signature(signer, chain_id)?;
        let key = signer.public_key();
        if self.signer_keys.contains(&key) {
            warn!(signer = %key, "Transaction signed twice with the same key");
        }

        self.signer_keys.push(key);
        self.signatures.push(signature);
        info!(signer = %key, signatures = count, "Signature attached");
        self.transition(AssemblerState::Signed);
        Ok(&self.signatures[count - 1])
    }

    /// Re-checks every operation, the operation count and the signature
    /// count. Does not check signatures against authorities.
    pub fn validate(&mut self) -> Result<(), TransactionError> {
        if !self.state.is_frozen() {
            return Err(TransactionError::incomplete("transaction not signed"));
        }
        self.to_signed()
            .validate(self.config.max_operations, self.config.max_signatures)?;
        self.transition(AssemblerState::Validated);
        Ok(())
    }

    fn to_signed(&self) -> SignedTransaction {
        SignedTransaction {
            transaction: self.transaction.clone(),
            signatures: self.signatures.clone(),
        }
    }

    /// Hands out the finished transaction.
    pub fn into_signed(self) -> Result<SignedTransaction, TransactionError> {
        if self.state != AssemblerState::Validated {
            return Err(TransactionError::incomplete("transaction not validated"));
        }
        Ok(SignedTransaction {
            transaction: self.transaction,
            signatures: self.signatures,
        })
    }
}
