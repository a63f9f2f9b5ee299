//! # Authority Errors

use shared_types::AccountId;
use thiserror::Error;

/// Errors raised while building or evaluating an authority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorityError {
    /// Threshold or weights make the authority malformed or unreachable
    #[error("Invalid authority: {reason}")]
    InvalidAuthority { reason: String },

    /// Account-based signer resolution revisited an account or went too deep
    #[error("Authority recursion through {account} exceeded depth {depth}")]
    AuthorityCycle { account: AccountId, depth: usize },
}

impl AuthorityError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidAuthority {
            reason: reason.into(),
        }
    }
}
