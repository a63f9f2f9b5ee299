//! # Core Value Types
//!
//! Immutable chain values consumed by every subsystem.
//!
//! ## Clusters
//!
//! - **Identity**: `ObjectId`, `AccountId`, `AssetId`, `ContentId`
//! - **Value**: `Amount`, `Price`
//! - **Replay protection**: `BlockId`, `ChainId`, `TimePointSec`
//! - **Operations**: `OperationKind`

use crate::errors::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// CLUSTER A: OBJECT IDENTITY
// =============================================================================

/// A chain object identifier `space.type.instance`.
///
/// Equality and ordering are by the full triple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct ObjectId {
    /// Protocol (1) or implementation (2) space.
    pub space: u8,
    /// Object type inside the space.
    #[serde(rename = "type")]
    pub type_id: u8,
    /// Instance number.
    pub instance: u64,
}

impl ObjectId {
    /// Creates an object id from its triple.
    pub const fn new(space: u8, type_id: u8, instance: u64) -> Self {
        Self {
            space,
            type_id,
            instance,
        }
    }

    /// `0.0.0` is the null object.
    pub fn is_null(&self) -> bool {
        self.space == 0 && self.type_id == 0 && self.instance == 0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.space, self.type_id, self.instance)
    }
}

impl FromStr for ObjectId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TypesError::MalformedObjectId(s.to_string());
        let mut parts = s.trim().split('.');
        let space = parts.next().ok_or_else(malformed)?;
        let type_id = parts.next().ok_or_else(malformed)?;
        let instance = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            space: space.parse().map_err(|_| malformed())?,
            type_id: type_id.parse().map_err(|_| malformed())?,
            instance: instance.parse().map_err(|_| malformed())?,
        })
    }
}

macro_rules! typed_object_id {
    ($(#[$meta:meta])* $name:ident, $space:expr, $type_id:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(ObjectId);

        impl $name {
            /// Object space of this id type.
            pub const SPACE: u8 = $space;
            /// Object type of this id type.
            pub const TYPE: u8 = $type_id;

            /// Creates an id from its instance number.
            pub const fn new(instance: u64) -> Self {
                Self(ObjectId::new($space, $type_id, instance))
            }

            /// Instance number.
            pub fn instance(&self) -> u64 {
                self.0.instance
            }

            /// The untyped object id.
            pub fn object_id(&self) -> ObjectId {
                self.0
            }
        }

        impl TryFrom<ObjectId> for $name {
            type Error = TypesError;

            fn try_from(id: ObjectId) -> Result<Self, Self::Error> {
                if id.space == $space && id.type_id == $type_id {
                    Ok(Self(id))
                } else {
                    Err(TypesError::WrongObjectType {
                        expected_space: $space,
                        expected_type: $type_id,
                        actual: id.to_string(),
                    })
                }
            }
        }

        impl From<$name> for ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s.parse::<ObjectId>()?)
            }
        }
    };
}

typed_object_id!(
    /// Account identifier `1.2.x`.
    AccountId,
    1,
    2
);

typed_object_id!(
    /// Asset identifier `1.3.x`.
    AssetId,
    1,
    3
);

typed_object_id!(
    /// Published content identifier `2.13.x`.
    ContentId,
    2,
    13
);

/// The network's core asset `1.3.0`. Fees are denominated in it.
pub const CORE_ASSET: AssetId = AssetId::new(0);

// =============================================================================
// CLUSTER B: VALUE
// =============================================================================

/// An amount of an asset in minor units.
///
/// Arithmetic is checked: it never wraps and never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Amount in the asset's smallest unit.
    pub amount: u64,
    /// Asset the amount is denominated in.
    pub asset_id: AssetId,
}

impl Amount {
    /// Creates an amount of `asset_id`.
    pub const fn new(amount: u64, asset_id: AssetId) -> Self {
        Self { amount, asset_id }
    }

    /// Creates an amount of the core asset.
    pub const fn core(amount: u64) -> Self {
        Self::new(amount, CORE_ASSET)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Adds two amounts of the same asset.
    pub fn checked_add(&self, other: &Amount) -> Result<Amount, TypesError> {
        self.ensure_same_asset(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Amount::new(amount, self.asset_id))
            .ok_or(TypesError::AmountOverflow)
    }

    /// Subtracts `other`; fails instead of producing a negative amount.
    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, TypesError> {
        self.ensure_same_asset(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Amount::new(amount, self.asset_id))
            .ok_or(TypesError::AmountOverflow)
    }

    fn ensure_same_asset(&self, other: &Amount) -> Result<(), TypesError> {
        if self.asset_id != other.asset_id {
            return Err(TypesError::AssetMismatch {
                left: self.asset_id,
                right: other.asset_id,
            });
        }
        Ok(())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::core(0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.asset_id)
    }
}

/// Exchange ratio `base : quote` between two assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub base: Amount,
    pub quote: Amount,
}

impl Price {
    /// Creates a price; both sides must be non-zero.
    pub fn new(base: Amount, quote: Amount) -> Result<Self, TypesError> {
        let price = Self { base, quote };
        price.validate()?;
        Ok(price)
    }

    /// The degenerate 1:1 price of an asset against itself.
    pub const fn unit(asset_id: AssetId) -> Self {
        Self {
            base: Amount::new(1, asset_id),
            quote: Amount::new(1, asset_id),
        }
    }

    pub fn validate(&self) -> Result<(), TypesError> {
        if self.base.is_zero() || self.quote.is_zero() {
            return Err(TypesError::InvalidPrice("zero-sided price".to_string()));
        }
        if self.base.asset_id == self.quote.asset_id && self.base.amount != self.quote.amount {
            return Err(TypesError::InvalidPrice(format!(
                "{} priced against itself at {}:{}",
                self.base.asset_id, self.base.amount, self.quote.amount
            )));
        }
        Ok(())
    }

    /// Converts `amount` to the other side of the price, rounding up.
    ///
    /// An amount in the base asset becomes quote asset and vice versa.
    pub fn convert(&self, amount: &Amount) -> Result<Amount, TypesError> {
        self.validate()?;
        if amount.asset_id == self.base.asset_id {
            let converted = mul_div_ceil(amount.amount, self.quote.amount, self.base.amount)?;
            Ok(Amount::new(converted, self.quote.asset_id))
        } else if amount.asset_id == self.quote.asset_id {
            let converted = mul_div_ceil(amount.amount, self.base.amount, self.quote.amount)?;
            Ok(Amount::new(converted, self.base.asset_id))
        } else {
            Err(TypesError::AssetMismatch {
                left: amount.asset_id,
                right: self.base.asset_id,
            })
        }
    }
}

/// `ceil(value * num / den)` without intermediate overflow.
fn mul_div_ceil(value: u64, num: u64, den: u64) -> Result<u64, TypesError> {
    let product = u128::from(value) * u128::from(num);
    let den = u128::from(den);
    let result = product.div_ceil(den);
    u64::try_from(result).map_err(|_| TypesError::AmountOverflow)
}

// =============================================================================
// CLUSTER C: REPLAY PROTECTION
// =============================================================================

/// A 20-byte block identifier. The first four bytes hold the block number
/// big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId(pub [u8; 20]);

impl BlockId {
    /// Block number embedded in the id.
    pub fn block_num(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Low 16 bits of the block number.
    pub fn ref_block_num(&self) -> u16 {
        (self.block_num() & 0xFFFF) as u16
    }

    /// Second 32-bit word of the id, little-endian.
    pub fn ref_block_prefix(&self) -> u32 {
        u32::from_le_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for BlockId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

/// 32-byte network identifier mixed into every signature digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChainId(pub [u8; 32]);

impl ChainId {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ChainId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], TypesError> {
    let bytes = hex::decode(s.trim()).map_err(|_| TypesError::MalformedIdentifier { expected: N })?;
    if bytes.len() != N {
        return Err(TypesError::MalformedIdentifier { expected: N });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Seconds since the UNIX epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimePointSec(u32);

impl TimePointSec {
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Current wall-clock time, saturating at the `u32` range.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self(u32::try_from(secs).unwrap_or(u32::MAX))
    }

    pub fn sec_since_epoch(&self) -> u32 {
        self.0
    }

    /// Zero is the unset expiration.
    pub fn is_set(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add_secs(&self, secs: u32) -> Option<Self> {
        self.0.checked_add(secs).map(Self)
    }
}

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// =============================================================================
// CLUSTER D: OPERATIONS
// =============================================================================

/// Closed set of operation kinds this client can build.
///
/// Adding a kind forces exhaustive updates in the operation builder and the
/// fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Transfer,
    CustomMessage,
    AccountRegister,
    AccountRegisterMultisig,
}

impl OperationKind {
    /// Every kind, in tag order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Transfer,
        OperationKind::CustomMessage,
        OperationKind::AccountRegister,
        OperationKind::AccountRegisterMultisig,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::CustomMessage => "custom_message",
            Self::AccountRegister => "account_register",
            Self::AccountRegisterMultisig => "account_register_multisig",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
