//! # Transaction Service
//!
//! Application service implementing [`TransactionApi`].
//!
//! ## Flow
//!
//! 1. Snapshot chain id, current fee table and head block (`ChainQuery`)
//! 2. Attach operations, reference block and expiration (`now + window`)
//! 3. Compute fees at the network's core unit price
//! 4. Sign with each signer in order, validate
//! 5. Broadcast (`submit` only); failures are returned unchanged

use crate::domain::{
    AssemblerConfig, NetworkProfile, SignedTransaction, TransactionAssembler, TransactionError,
};
use crate::ports::inbound::TransactionApi;
use crate::ports::outbound::{Broadcaster, ChainQuery, SystemTimeSource, TimeSource};
use ql_01_authority::{Authority, AuthorityResolver};
use ql_04_operations::Operation;
use shared_crypto::CompactSigner;
use tracing::{info, warn};

pub struct TransactionService<C: ChainQuery, B: Broadcaster, T: TimeSource = SystemTimeSource> {
    chain: C,
    broadcaster: B,
    time: T,
    config: AssemblerConfig,
    network: NetworkProfile,
}

impl<C: ChainQuery, B: Broadcaster> TransactionService<C, B> {
    pub fn new(chain: C, broadcaster: B, config: AssemblerConfig, network: NetworkProfile) -> Self {
        Self {
            chain,
            broadcaster,
            time: SystemTimeSource,
            config,
            network,
        }
    }
}

impl<C: ChainQuery, B: Broadcaster, T: TimeSource> TransactionService<C, B, T> {
    pub fn with_time_source<U: TimeSource>(self, time: U) -> TransactionService<C, B, U> {
        TransactionService {
            chain: self.chain,
            broadcaster: self.broadcaster,
            time,
            config: self.config,
            network: self.network,
        }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn network(&self) -> &NetworkProfile {
        &self.network
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    /// Whether the signers of `transaction` satisfy `authority` on the
    /// current chain.
    pub fn authorizes<R: AuthorityResolver + ?Sized>(
        &self,
        transaction: &SignedTransaction,
        authority: &Authority,
        resolver: &R,
    ) -> Result<bool, TransactionError> {
        let chain_id = self.chain.get_chain_properties()?.chain_id;
        transaction.satisfies(
            &chain_id,
            authority,
            resolver,
            self.config.max_authority_depth,
        )
    }
}

impl<C: ChainQuery, B: Broadcaster, T: TimeSource> TransactionApi for TransactionService<C, B, T> {
    fn prepare(
        &self,
        operations: Vec<Operation>,
        signers: &[&dyn CompactSigner],
    ) -> Result<SignedTransaction, TransactionError> {
        let chain_id = self.chain.get_chain_properties()?.chain_id;
        let fees = self.chain.get_global_properties()?.current_fees;
        let head = self.chain.get_dynamic_global_properties()?;

        let mut assembler = TransactionAssembler::new(self.config.clone());
        for operation in operations {
            assembler.add_operation(operation)?;
        }
        assembler.set_reference_block(&head.head_block_id)?;
        assembler.expire_after(self.time.now())?;
        assembler.compute_fees(&fees, &self.network.unit_price())?;
        for signer in signers {
            assembler.sign(*signer, &chain_id)?;
        }
        assembler.validate()?;

        let signed = assembler.into_signed()?;
        info!(
            network = self.network.name,
            operations = signed.transaction.operations.len(),
            signatures = signed.signatures.len(),
            ref_block_num = signed.transaction.ref_block_num,
            "Transaction prepared"
        );
        Ok(signed)
    }

    fn submit(
        &self,
        operations: Vec<Operation>,
        signers: &[&dyn CompactSigner],
    ) -> Result<SignedTransaction, TransactionError> {
        let signed = self.prepare(operations, signers)?;
        let id = signed.id()?;

        if let Err(e) = self.broadcaster.broadcast_transaction(&signed) {
            warn!(transaction = %id, error = %e, "Broadcast failed");
            return Err(e.into());
        }

        info!(transaction = %id, "Transaction broadcast");
        Ok(signed)
    }
}
