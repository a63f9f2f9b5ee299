//! Outbound (Driven) ports for the Authority subsystem.

use crate::domain::Authority;
use shared_types::AccountId;
use std::collections::{BTreeMap, HashMap};

/// Looks up the active authority of an account.
///
/// Backed by a chain snapshot or the wallet's account cache. `None` means the
/// account is unknown; it then contributes no weight.
pub trait AuthorityResolver {
    fn active_authority(&self, account: &AccountId) -> Option<Authority>;
}

impl AuthorityResolver for HashMap<AccountId, Authority> {
    fn active_authority(&self, account: &AccountId) -> Option<Authority> {
        self.get(account).cloned()
    }
}

impl AuthorityResolver for BTreeMap<AccountId, Authority> {
    fn active_authority(&self, account: &AccountId) -> Option<Authority> {
        self.get(account).cloned()
    }
}

/// Resolver that knows no accounts; only key entries count.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeysOnly;

impl AuthorityResolver for KeysOnly {
    fn active_authority(&self, _account: &AccountId) -> Option<Authority> {
        None
    }
}
