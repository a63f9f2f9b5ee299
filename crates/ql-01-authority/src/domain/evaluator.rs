//! # Authority Evaluation
//!
//! Accumulates signer weight against an authority. Account entries are
//! followed through the resolver as a directed graph; the walk keeps the
//! accounts on the current path and a depth counter, and fails instead of
//! looping.

use super::authority::{Authority, SignerSet};
use super::errors::AuthorityError;
use crate::ports::outbound::AuthorityResolver;
use shared_types::AccountId;
use tracing::debug;

/// Default bound on account-to-account resolution.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Evaluates authorities against signer sets.
pub struct AuthorityEvaluator<'a, R: AuthorityResolver + ?Sized> {
    resolver: &'a R,
    max_depth: usize,
}

impl<'a, R: AuthorityResolver + ?Sized> AuthorityEvaluator<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Total weight the signers bring to `authority`.
    ///
    /// Keys add their weight when present. Accounts add their weight when
    /// present in the signer set, or when their own authority (resolved and
    /// evaluated recursively) is satisfied by the same signers.
    ///
    /// # Errors
    ///
    /// `InvalidAuthority` when this or a resolved authority has a zero
    /// threshold or a zero weight.
    /// `AuthorityCycle` when resolution revisits an account on the current
    /// path or needs to go deeper than the configured bound.
    pub fn effective_weight(
        &self,
        authority: &Authority,
        signers: &SignerSet,
    ) -> Result<u64, AuthorityError> {
        let mut path = Vec::new();
        self.weight_at(authority, signers, 0, &mut path)
    }

    /// True when the effective weight reaches the threshold.
    pub fn satisfies(
        &self,
        authority: &Authority,
        signers: &SignerSet,
    ) -> Result<bool, AuthorityError> {
        let weight = self.effective_weight(authority, signers)?;
        Ok(weight >= u64::from(authority.weight_threshold()))
    }

    fn weight_at(
        &self,
        authority: &Authority,
        signers: &SignerSet,
        depth: usize,
        path: &mut Vec<AccountId>,
    ) -> Result<u64, AuthorityError> {
        authority.check_weights()?;

        let mut weight: u64 = authority
            .key_auths()
            .iter()
            .filter(|(key, _)| signers.contains_key(key))
            .map(|(_, w)| u64::from(*w))
            .sum();

        for (account, account_weight) in authority.account_auths() {
            if signers.contains_account(account) {
                weight += u64::from(*account_weight);
                continue;
            }

            let next_depth = depth + 1;
            if path.contains(account) || next_depth > self.max_depth {
                debug!(
                    account = %account,
                    depth = next_depth,
                    "Authority resolution aborted"
                );
                return Err(AuthorityError::AuthorityCycle {
                    account: *account,
                    depth: next_depth,
                });
            }

            let Some(nested) = self.resolver.active_authority(account) else {
                continue;
            };

            path.push(*account);
            let nested_weight = self.weight_at(&nested, signers, next_depth, path)?;
            path.pop();

            if nested_weight >= u64::from(nested.weight_threshold()) {
                weight += u64::from(*account_weight);
            }
        }

        Ok(weight)
    }
}
