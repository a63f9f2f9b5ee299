//! # Registrar Service
//!
//! Application service implementing [`RegistrarApi`].
//!
//! ## Flow
//!
//! 1. Check the new name's shape and that nobody holds it yet
//! 2. Resolve the registrar by name among this wallet's accounts
//! 3. Check the signer satisfies the registrar's active authority
//! 4. Build the registration and hand it to `TransactionApi::submit`

use crate::domain::{
    build_multisig_registration, build_registration, AccountKeys, BrainKey, RegistrarError,
};
use crate::ports::inbound::RegistrarApi;
use crate::ports::outbound::{AccountRecord, WalletGateway};
use ql_01_authority::{Authority, AuthorityEvaluator, SignerSet, DEFAULT_MAX_DEPTH};
use ql_04_operations::{validate_account_name, Operation};
use ql_05_transaction::{SignedTransaction, TransactionApi};
use shared_crypto::{CompactSigner, PublicKey};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub struct RegistrarService<W: WalletGateway, T: TransactionApi> {
    wallet: W,
    transactions: T,
    max_authority_depth: usize,
}

impl<W: WalletGateway, T: TransactionApi> RegistrarService<W, T> {
    pub fn new(wallet: W, transactions: T) -> Self {
        Self {
            wallet,
            transactions,
            max_authority_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_authority_depth(mut self, depth: usize) -> Self {
        self.max_authority_depth = depth;
        self
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn transactions(&self) -> &T {
        &self.transactions
    }

    fn ensure_available(&self, name: &str) -> Result<(), RegistrarError> {
        validate_account_name(name)?;
        if self.wallet.get_account(name)?.is_some() {
            return Err(RegistrarError::NameTaken(name.to_string()));
        }
        Ok(())
    }

    /// Finds `registrar` among the wallet's own accounts and checks that
    /// `signer` can act for it.
    fn resolve_registrar(
        &self,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<AccountRecord, RegistrarError> {
        let record = self
            .wallet
            .get_account(registrar)?
            .ok_or_else(|| RegistrarError::UnknownRegistrar(registrar.to_string()))?;

        let mine = self.wallet.list_my_accounts()?;
        if !mine.iter().any(|a| a.id == record.id) {
            return Err(RegistrarError::RegistrarNotOwned(registrar.to_string()));
        }

        // Account-level delegation resolves only through this wallet's accounts.
        let resolver: BTreeMap<_, Authority> =
            mine.into_iter().map(|a| (a.id, a.active)).collect();
        let signers = SignerSet::new().with_key(signer.public_key());
        let authorized = AuthorityEvaluator::new(&resolver)
            .with_max_depth(self.max_authority_depth)
            .satisfies(&record.active, &signers)?;
        if !authorized {
            warn!(
                registrar = %record.id,
                signer = %signer.public_key(),
                "Signer cannot act for registrar"
            );
            return Err(RegistrarError::SignerNotAuthorized(registrar.to_string()));
        }
        Ok(record)
    }

    fn submit(
        &self,
        name: &str,
        operation: Operation,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError> {
        let signed = self.transactions.submit(vec![operation], &[signer])?;
        info!(account = name, "Account registration submitted");
        Ok(signed)
    }
}

impl<W: WalletGateway, T: TransactionApi> RegistrarApi for RegistrarService<W, T> {
    fn create_account(
        &self,
        brain_key: &BrainKey,
        name: &str,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError> {
        let keys = AccountKeys::from_brain_key(brain_key)?;
        self.register_account(
            name,
            keys.owner_public(),
            keys.active_public(),
            keys.memo_public(),
            registrar,
            signer,
        )
    }

    fn register_account(
        &self,
        name: &str,
        owner: PublicKey,
        active: PublicKey,
        memo_key: PublicKey,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError> {
        self.ensure_available(name)?;
        let record = self.resolve_registrar(registrar, signer)?;
        let operation = build_registration(
            name,
            record.id,
            Authority::single_key(owner),
            Authority::single_key(active),
            memo_key,
        )?;
        self.submit(name, operation, signer)
    }

    fn register_multisig_account(
        &self,
        name: &str,
        owner: Authority,
        active: Authority,
        memo_key: PublicKey,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError> {
        self.ensure_available(name)?;
        let record = self.resolve_registrar(registrar, signer)?;
        let operation = build_multisig_registration(name, record.id, owner, active, memo_key)?;
        self.submit(name, operation, signer)
    }
}
