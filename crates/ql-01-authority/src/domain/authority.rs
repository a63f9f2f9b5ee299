//! # Authority
//!
//! Weighted threshold policy over public keys and accounts. An account keeps
//! one authority per tier (owner, active).
//!
//! Entries are stored in `BTreeMap`s so iteration (and therefore canonical
//! encoding) follows key order regardless of insertion order.

use super::errors::AuthorityError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_crypto::PublicKey;
use shared_types::AccountId;
use std::collections::{BTreeMap, BTreeSet};

/// Weight of a single key or account entry.
pub type Weight = u16;

/// A weighted threshold over keys and accounts.
///
/// Deserialization applies the structural checks of [`Authority::check_weights`],
/// so a zero threshold or a zero weight never enters from outside.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorityRecord")]
pub struct Authority {
    weight_threshold: u32,
    #[serde_as(as = "Vec<(_, _)>")]
    account_auths: BTreeMap<AccountId, Weight>,
    #[serde_as(as = "Vec<(_, _)>")]
    key_auths: BTreeMap<PublicKey, Weight>,
}

/// Wire shape of [`Authority`] before its weights are checked.
#[serde_as]
#[derive(Deserialize)]
struct AuthorityRecord {
    weight_threshold: u32,
    #[serde_as(as = "Vec<(_, _)>")]
    account_auths: BTreeMap<AccountId, Weight>,
    #[serde_as(as = "Vec<(_, _)>")]
    key_auths: BTreeMap<PublicKey, Weight>,
}

impl TryFrom<AuthorityRecord> for Authority {
    type Error = AuthorityError;

    fn try_from(record: AuthorityRecord) -> Result<Self, Self::Error> {
        let authority = Self {
            weight_threshold: record.weight_threshold,
            account_auths: record.account_auths,
            key_auths: record.key_auths,
        };
        authority.check_weights()?;
        Ok(authority)
    }
}

impl Authority {
    /// Builds and validates an authority.
    ///
    /// # Errors
    ///
    /// `InvalidAuthority` if the threshold is zero, a weight is zero, an
    /// entry is listed twice, or all weights together cannot reach the
    /// threshold.
    pub fn new(
        weight_threshold: u32,
        key_auths: impl IntoIterator<Item = (PublicKey, Weight)>,
        account_auths: impl IntoIterator<Item = (AccountId, Weight)>,
    ) -> Result<Self, AuthorityError> {
        let mut keys = BTreeMap::new();
        for (key, weight) in key_auths {
            if keys.insert(key, weight).is_some() {
                return Err(AuthorityError::invalid(format!("key {} listed twice", key)));
            }
        }

        let mut accounts = BTreeMap::new();
        for (account, weight) in account_auths {
            if accounts.insert(account, weight).is_some() {
                return Err(AuthorityError::invalid(format!(
                    "account {} listed twice",
                    account
                )));
            }
        }

        let authority = Self {
            weight_threshold,
            account_auths: accounts,
            key_auths: keys,
        };
        authority.validate()?;
        Ok(authority)
    }

    /// Threshold 1 over a single key of weight 1.
    pub fn single_key(key: PublicKey) -> Self {
        Self {
            weight_threshold: 1,
            account_auths: BTreeMap::new(),
            key_auths: BTreeMap::from([(key, 1)]),
        }
    }

    /// The authority that can never be satisfied.
    ///
    /// Used to permanently disable a tier.
    pub fn null() -> Self {
        Self {
            weight_threshold: 1,
            account_auths: BTreeMap::new(),
            key_auths: BTreeMap::new(),
        }
    }

    /// Skips every check. Lets evaluator tests feed malformed authorities.
    #[cfg(test)]
    pub(crate) fn unchecked(
        weight_threshold: u32,
        key_auths: impl IntoIterator<Item = (PublicKey, Weight)>,
        account_auths: impl IntoIterator<Item = (AccountId, Weight)>,
    ) -> Self {
        Self {
            weight_threshold,
            account_auths: account_auths.into_iter().collect(),
            key_auths: key_auths.into_iter().collect(),
        }
    }

    /// Starts a multisig builder with the given threshold.
    pub fn builder(weight_threshold: u32) -> AuthorityBuilder {
        AuthorityBuilder {
            weight_threshold,
            key_auths: Vec::new(),
            account_auths: Vec::new(),
        }
    }

    /// Re-checks the construction rules. Pure.
    pub fn validate(&self) -> Result<(), AuthorityError> {
        self.check_weights()?;
        let total = self.total_weight();
        if total < u64::from(self.weight_threshold) {
            return Err(AuthorityError::invalid(format!(
                "total weight {} below threshold {}",
                total, self.weight_threshold
            )));
        }
        Ok(())
    }

    /// Threshold of at least 1 and no zero weight. Unlike [`Authority::validate`]
    /// this accepts [`Authority::null`].
    pub fn check_weights(&self) -> Result<(), AuthorityError> {
        if self.weight_threshold == 0 {
            return Err(AuthorityError::invalid("weight threshold must be at least 1"));
        }
        if self.key_auths.values().any(|w| *w == 0) {
            return Err(AuthorityError::invalid("key weight must be positive"));
        }
        if self.account_auths.values().any(|w| *w == 0) {
            return Err(AuthorityError::invalid("account weight must be positive"));
        }
        Ok(())
    }

    /// True when no signer subset can ever reach the threshold.
    pub fn is_impossible(&self) -> bool {
        self.total_weight() < u64::from(self.weight_threshold)
    }

    /// Sum of every key and account weight.
    pub fn total_weight(&self) -> u64 {
        self.key_auths
            .values()
            .chain(self.account_auths.values())
            .map(|w| u64::from(*w))
            .sum()
    }

    pub fn weight_threshold(&self) -> u32 {
        self.weight_threshold
    }

    pub fn key_auths(&self) -> &BTreeMap<PublicKey, Weight> {
        &self.key_auths
    }

    pub fn account_auths(&self) -> &BTreeMap<AccountId, Weight> {
        &self.account_auths
    }
}

/// Collects multisig entries before validating them as a whole.
#[derive(Debug, Clone)]
pub struct AuthorityBuilder {
    weight_threshold: u32,
    key_auths: Vec<(PublicKey, Weight)>,
    account_auths: Vec<(AccountId, Weight)>,
}

impl AuthorityBuilder {
    pub fn key(mut self, key: PublicKey, weight: Weight) -> Self {
        self.key_auths.push((key, weight));
        self
    }

    pub fn account(mut self, account: AccountId, weight: Weight) -> Self {
        self.account_auths.push((account, weight));
        self
    }

    pub fn build(self) -> Result<Authority, AuthorityError> {
        Authority::new(self.weight_threshold, self.key_auths, self.account_auths)
    }
}

/// Identities known to have signed: recovered public keys and accounts
/// whose own authority is already known to be satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerSet {
    keys: BTreeSet<PublicKey>,
    accounts: BTreeSet<AccountId>,
}

impl SignerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = PublicKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            accounts: BTreeSet::new(),
        }
    }

    pub fn with_key(mut self, key: PublicKey) -> Self {
        self.keys.insert(key);
        self
    }

    pub fn with_account(mut self, account: AccountId) -> Self {
        self.accounts.insert(account);
        self
    }

    pub fn insert_key(&mut self, key: PublicKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains_key(&self, key: &PublicKey) -> bool {
        self.keys.contains(key)
    }

    pub fn contains_account(&self, account: &AccountId) -> bool {
        self.accounts.contains(account)
    }
}
