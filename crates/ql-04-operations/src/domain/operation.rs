//! # Operation
//!
//! Closed sum over every operation this client builds. Fee lookup and
//! validation match exhaustively, so a new variant does not compile until
//! both are updated.

use super::account::AccountCreate;
use super::custom::Custom;
use super::errors::OperationError;
use super::transfer::Transfer;
use ql_02_fee_schedule::Chargeable;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, OperationKind, CORE_ASSET};

/// Fees are paid in the core asset.
pub(crate) fn check_fee(fee: &Amount) -> Result<(), OperationError> {
    if fee.asset_id != CORE_ASSET {
        return Err(OperationError::invalid_amount(format!(
            "fee must be paid in {}, got {}",
            CORE_ASSET, fee.asset_id
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Transfer(Transfer),
    CustomMessage(Custom),
    AccountRegister(AccountCreate),
    AccountRegisterMultisig(AccountCreate),
}

impl Operation {
    pub fn register(create: AccountCreate) -> Self {
        Self::AccountRegister(create)
    }

    pub fn register_multisig(create: AccountCreate) -> Self {
        Self::AccountRegisterMultisig(create)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Transfer(_) => OperationKind::Transfer,
            Self::CustomMessage(_) => OperationKind::CustomMessage,
            Self::AccountRegister(_) => OperationKind::AccountRegister,
            Self::AccountRegisterMultisig(_) => OperationKind::AccountRegisterMultisig,
        }
    }

    pub fn fee(&self) -> &Amount {
        match self {
            Self::Transfer(op) => &op.fee,
            Self::CustomMessage(op) => &op.fee,
            Self::AccountRegister(op) | Self::AccountRegisterMultisig(op) => &op.fee,
        }
    }

    fn fee_mut(&mut self) -> &mut Amount {
        match self {
            Self::Transfer(op) => &mut op.fee,
            Self::CustomMessage(op) => &mut op.fee,
            Self::AccountRegister(op) | Self::AccountRegisterMultisig(op) => &mut op.fee,
        }
    }

    /// Side-effect-free check of the variant's field rules. Calling it
    /// repeatedly yields the same result.
    pub fn validate(&self) -> Result<(), OperationError> {
        match self {
            Self::Transfer(op) => op.validate(),
            Self::CustomMessage(op) => op.validate(),
            Self::AccountRegister(op) => op.validate_single_key(),
            Self::AccountRegisterMultisig(op) => op.validate(),
        }
    }
}

impl Chargeable for Operation {
    fn kind(&self) -> OperationKind {
        Operation::kind(self)
    }

    fn payload_size(&self) -> usize {
        match self {
            Self::Transfer(op) => op.payload_size(),
            Self::CustomMessage(op) => op.data.len(),
            Self::AccountRegister(_) | Self::AccountRegisterMultisig(_) => 0,
        }
    }

    fn set_fee(&mut self, fee: Amount) {
        *self.fee_mut() = fee;
    }
}

impl From<Transfer> for Operation {
    fn from(op: Transfer) -> Self {
        Self::Transfer(op)
    }
}

impl From<Custom> for Operation {
    fn from(op: Custom) -> Self {
        Self::CustomMessage(op)
    }
}
