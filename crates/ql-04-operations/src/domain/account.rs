//! # Account Registration
//!
//! Creates a named account with owner and active authorities and a memo
//! key. Name uniqueness is decided by the chain; only the shape is checked
//! locally.

use super::errors::OperationError;
use super::operation::check_fee;
use ql_01_authority::{Authority, AuthorityError};
use serde::{Deserialize, Serialize};
use shared_crypto::PublicKey;
use shared_types::{AccountId, Amount};

pub const MIN_NAME_LENGTH: usize = 5;
pub const MAX_NAME_LENGTH: usize = 63;

/// Voting account meaning "vote with my own stake".
pub const PROXY_TO_SELF_ACCOUNT: AccountId = AccountId::new(3);

/// Checks the local shape rules of an account name.
///
/// Lowercase letters, digits and hyphens; starts with a letter, ends with a
/// letter or digit, 5 to 63 characters.
pub fn validate_account_name(name: &str) -> Result<(), OperationError> {
    let malformed = |reason| OperationError::MalformedName {
        name: name.to_string(),
        reason,
    };

    if name.len() < MIN_NAME_LENGTH {
        return Err(malformed("too short"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(malformed("too long"));
    }
    if !name
        .bytes()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'-')
    {
        return Err(malformed("only lowercase letters, digits and '-' allowed"));
    }
    if !name.as_bytes()[0].is_ascii_lowercase() {
        return Err(malformed("must start with a letter"));
    }
    if name.ends_with('-') {
        return Err(malformed("must end with a letter or digit"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOptions {
    pub memo_key: PublicKey,
    pub voting_account: AccountId,
    pub num_miner: u16,
    pub allow_subscription: bool,
    pub price_per_subscribe: Amount,
    pub subscription_period: u32,
}

impl AccountOptions {
    pub fn new(memo_key: PublicKey) -> Self {
        Self {
            memo_key,
            voting_account: PROXY_TO_SELF_ACCOUNT,
            num_miner: 0,
            allow_subscription: false,
            price_per_subscribe: Amount::default(),
            subscription_period: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreate {
    pub fee: Amount,
    pub registrar: AccountId,
    pub referrer: AccountId,
    pub name: String,
    pub owner: Authority,
    pub active: Authority,
    pub options: AccountOptions,
}

impl AccountCreate {
    /// Registration paid by `registrar`, who is also the referrer.
    pub fn new(
        name: impl Into<String>,
        registrar: AccountId,
        owner: Authority,
        active: Authority,
        memo_key: PublicKey,
    ) -> Self {
        Self {
            fee: Amount::default(),
            registrar,
            referrer: registrar,
            name: name.into(),
            owner,
            active,
            options: AccountOptions::new(memo_key),
        }
    }

    pub fn with_referrer(mut self, referrer: AccountId) -> Self {
        self.referrer = referrer;
        self
    }

    /// Checks shared by every registration flavour.
    pub fn validate(&self) -> Result<(), OperationError> {
        check_fee(&self.fee)?;
        validate_account_name(&self.name)?;
        self.owner.validate()?;
        self.active.validate()?;
        if self.options.allow_subscription && self.options.subscription_period == 0 {
            return Err(OperationError::invalid_amount(
                "subscription period must be positive when subscriptions are allowed",
            ));
        }
        Ok(())
    }

    /// Additional rule for plain registration: both tiers are controlled by
    /// exactly one key.
    pub fn validate_single_key(&self) -> Result<(), OperationError> {
        self.validate()?;
        for (tier, authority) in [("owner", &self.owner), ("active", &self.active)] {
            if authority.key_auths().len() != 1 || !authority.account_auths().is_empty() {
                return Err(AuthorityError::InvalidAuthority {
                    reason: format!("{} authority must be a single key", tier),
                }
                .into());
            }
        }
        Ok(())
    }
}
