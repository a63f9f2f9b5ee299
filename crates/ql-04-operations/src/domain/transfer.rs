//! # Transfer
//!
//! Moves an amount from an account to an account or to a content object,
//! with an optional encrypted memo.

use super::errors::OperationError;
use super::operation::check_fee;
use ql_03_memo::{Memo, MAX_MESSAGE_SIZE};
use serde::{Deserialize, Serialize};
use shared_crypto::symmetric::TAG_SIZE;
use shared_types::{AccountId, Amount, ContentId, ObjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub fee: Amount,
    pub from: AccountId,
    /// Receiving account or content object.
    pub to: ObjectId,
    pub amount: Amount,
    pub memo: Option<Memo>,
}

impl Transfer {
    /// A transfer with an unset fee and no memo.
    pub fn new(from: AccountId, to: impl Into<ObjectId>, amount: Amount) -> Self {
        Self {
            fee: Amount::default(),
            from,
            to: to.into(),
            amount,
            memo: None,
        }
    }

    pub fn with_memo(mut self, memo: Memo) -> Self {
        self.memo = Some(memo);
        self
    }

    /// Pure field check.
    pub fn validate(&self) -> Result<(), OperationError> {
        check_fee(&self.fee)?;

        if self.amount.is_zero() {
            return Err(OperationError::invalid_amount("transfer amount must be positive"));
        }

        let to_account = AccountId::try_from(self.to).ok();
        let to_content = ContentId::try_from(self.to).is_ok();
        if to_account.is_none() && !to_content {
            return Err(OperationError::InvalidDestination(format!(
                "{} is neither an account nor a content object",
                self.to
            )));
        }
        if to_account == Some(self.from) {
            return Err(OperationError::InvalidDestination(format!(
                "{} cannot transfer to itself",
                self.from
            )));
        }

        if let Some(memo) = &self.memo {
            let max = MAX_MESSAGE_SIZE + TAG_SIZE;
            if memo.size() > max {
                return Err(ql_03_memo::MemoError::MessageTooLarge {
                    size: memo.size(),
                    max,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Memo ciphertext bytes, charged per kilobyte.
    pub(crate) fn payload_size(&self) -> usize {
        self.memo.as_ref().map_or(0, Memo::size)
    }
}
