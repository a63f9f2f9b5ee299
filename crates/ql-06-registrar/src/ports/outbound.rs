//! Outbound (Driven) ports for the Registrar subsystem.

use ql_01_authority::Authority;
use ql_05_transaction::GatewayError;
use serde::{Deserialize, Serialize};
use shared_crypto::PublicKey;
use shared_types::AccountId;

/// An on-chain account as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub name: String,
    pub owner: Authority,
    pub active: Authority,
    pub memo_key: PublicKey,
}

/// Account lookups served by the wallet backend.
pub trait WalletGateway: Send + Sync {
    /// `Ok(None)` when no account carries `name`.
    fn get_account(&self, name: &str) -> Result<Option<AccountRecord>, GatewayError>;

    /// Accounts whose keys this wallet controls.
    fn list_my_accounts(&self) -> Result<Vec<AccountRecord>, GatewayError>;
}
