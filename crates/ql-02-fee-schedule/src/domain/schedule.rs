//! # Fee Schedule
//!
//! Pure lookup plus currency conversion. Fees are tabled in a reference
//! asset, scaled by the schedule's `scale` (basis points of 10000) and then
//! converted through a caller-supplied price. Every step rounds up so an
//! operation is never under-charged.

use super::errors::FeeError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, AssetId, OperationKind, Price, TypesError, CORE_ASSET};
use std::collections::BTreeMap;
use tracing::debug;

/// `scale` value that leaves fees unchanged.
pub const FULL_SCALE: u32 = 10_000;

/// Payload bytes per charged kilobyte.
const KBYTE: u128 = 1024;

/// Anything that carries a fee slot and can be priced.
pub trait Chargeable {
    /// Kind used for the fee table lookup.
    fn kind(&self) -> OperationKind;

    /// Bytes charged at `price_per_kbyte` (memo, message data, ...).
    fn payload_size(&self) -> usize;

    /// Overwrites the fee slot.
    fn set_fee(&mut self, fee: Amount);
}

/// Fee parameters of a single operation kind, in the reference asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParameters {
    /// Flat fee.
    pub fee: u64,
    /// Additional fee per started kilobyte of payload.
    #[serde(default)]
    pub price_per_kbyte: u64,
}

impl FeeParameters {
    pub const fn flat(fee: u64) -> Self {
        Self {
            fee,
            price_per_kbyte: 0,
        }
    }

    fn base_fee(&self, payload_bytes: usize) -> u128 {
        let bytes = payload_bytes as u128;
        let data_fee = (bytes * u128::from(self.price_per_kbyte)).div_ceil(KBYTE);
        u128::from(self.fee) + data_fee
    }
}

/// Fee table keyed by operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub parameters: BTreeMap<OperationKind, FeeParameters>,
    /// Multiplier in basis points of [`FULL_SCALE`].
    pub scale: u32,
    /// Asset the table is denominated in.
    #[serde(default = "default_reference_asset")]
    pub reference_asset: AssetId,
}

fn default_reference_asset() -> AssetId {
    CORE_ASSET
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::empty()
            .with(
                OperationKind::Transfer,
                FeeParameters {
                    fee: 500_000,
                    price_per_kbyte: 1_000_000,
                },
            )
            .with(
                OperationKind::CustomMessage,
                FeeParameters {
                    fee: 500_000,
                    price_per_kbyte: 1_000_000,
                },
            )
            .with(OperationKind::AccountRegister, FeeParameters::flat(5_000_000))
            .with(
                OperationKind::AccountRegisterMultisig,
                FeeParameters::flat(5_000_000),
            )
    }
}

impl FeeSchedule {
    /// A schedule with no entries at full scale.
    pub fn empty() -> Self {
        Self {
            parameters: BTreeMap::new(),
            scale: FULL_SCALE,
            reference_asset: CORE_ASSET,
        }
    }

    pub fn with(mut self, kind: OperationKind, parameters: FeeParameters) -> Self {
        self.parameters.insert(kind, parameters);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn parameters_for(&self, kind: OperationKind) -> Result<&FeeParameters, FeeError> {
        self.parameters
            .get(&kind)
            .ok_or(FeeError::UnknownOperationKind(kind))
    }

    /// Fee for an operation of `kind` carrying `payload_bytes` of payload,
    /// converted through `price`.
    ///
    /// # Errors
    ///
    /// - `UnknownOperationKind` if the table has no entry for `kind`
    /// - `Conversion` on overflow, if `price` does not involve the
    ///   reference asset, or if the converted fee is not in `CORE_ASSET`
    pub fn fee_for(
        &self,
        kind: OperationKind,
        payload_bytes: usize,
        price: &Price,
    ) -> Result<Amount, FeeError> {
        let parameters = self.parameters_for(kind)?;
        let scaled =
            (parameters.base_fee(payload_bytes) * u128::from(self.scale)).div_ceil(FULL_SCALE.into());
        let scaled = u64::try_from(scaled).map_err(|_| TypesError::AmountOverflow)?;

        let reference = Amount::new(scaled, self.reference_asset);
        let fee = price.convert(&reference)?;
        if fee.asset_id != CORE_ASSET {
            return Err(FeeError::Conversion(TypesError::AssetMismatch {
                left: fee.asset_id,
                right: CORE_ASSET,
            }));
        }
        Ok(fee)
    }

    /// Computes the fee of `operation` and writes it into its fee slot.
    pub fn set_fee<C: Chargeable + ?Sized>(
        &self,
        operation: &mut C,
        price: &Price,
    ) -> Result<Amount, FeeError> {
        let kind = operation.kind();
        let fee = self.fee_for(kind, operation.payload_size(), price)?;
        debug!(kind = %kind, fee = %fee, "Fee attached");
        operation.set_fee(fee);
        Ok(fee)
    }
}
