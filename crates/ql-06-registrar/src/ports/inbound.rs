//! Inbound (Driving) ports for the Registrar subsystem.

use crate::domain::{BrainKey, RegistrarError};
use ql_01_authority::Authority;
use ql_05_transaction::SignedTransaction;
use shared_crypto::{CompactSigner, PublicKey};

/// Account creation paid and signed by a registrar account of this wallet.
pub trait RegistrarApi {
    /// Derives owner, active and memo keys from `brain_key` and registers
    /// `name` with them.
    fn create_account(
        &self,
        brain_key: &BrainKey,
        name: &str,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError>;

    /// Registers `name` with caller-supplied public keys.
    fn register_account(
        &self,
        name: &str,
        owner: PublicKey,
        active: PublicKey,
        memo_key: PublicKey,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError>;

    /// Registers `name` with weighted multi-party authorities.
    fn register_multisig_account(
        &self,
        name: &str,
        owner: Authority,
        active: Authority,
        memo_key: PublicKey,
        registrar: &str,
        signer: &dyn CompactSigner,
    ) -> Result<SignedTransaction, RegistrarError>;
}
