//! Outbound (Driven) ports for the Transaction subsystem.
//!
//! Read-only chain snapshots, broadcast and time. Implemented by the node
//! transport outside this workspace.

use crate::domain::SignedTransaction;
use ql_02_fee_schedule::FeeSchedule;
use serde::{Deserialize, Serialize};
use shared_types::{BlockId, ChainId, TimePointSec};
use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Communication error: {0}")]
    CommunicationError(String),

    #[error("Rejected by node: {0}")]
    Rejected(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProperties {
    pub chain_id: ChainId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalProperties {
    pub current_fees: FeeSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicGlobalProperties {
    pub head_block_number: u32,
    pub head_block_id: BlockId,
    pub time: TimePointSec,
}

/// Read-only chain snapshots, consumed before assembly begins.
pub trait ChainQuery: Send + Sync {
    fn get_chain_properties(&self) -> Result<ChainProperties, GatewayError>;

    fn get_global_properties(&self) -> Result<GlobalProperties, GatewayError>;

    fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties, GatewayError>;
}

/// Hands a signed transaction to the network.
pub trait Broadcaster: Send + Sync {
    fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<(), GatewayError>;
}

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> TimePointSec;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimePointSec {
        TimePointSec::now()
    }
}

/// Fixed clock for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct MockTimeSource(pub TimePointSec);

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> TimePointSec {
        self.0
    }
}

/// In-memory chain snapshot for testing.
#[cfg(test)]
pub struct MockChain {
    pub chain_id: ChainId,
    pub fees: FeeSchedule,
    pub head_block_id: BlockId,
    pub offline: bool,
}

#[cfg(test)]
impl MockChain {
    pub fn new() -> Self {
        let mut head = [0u8; 20];
        head[..4].copy_from_slice(&1_000u32.to_be_bytes());
        Self {
            chain_id: ChainId([0x17; 32]),
            fees: FeeSchedule::default(),
            head_block_id: BlockId(head),
            offline: false,
        }
    }

    fn check(&self) -> Result<(), GatewayError> {
        if self.offline {
            return Err(GatewayError::CommunicationError("node offline".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
impl ChainQuery for MockChain {
    fn get_chain_properties(&self) -> Result<ChainProperties, GatewayError> {
        self.check()?;
        Ok(ChainProperties {
            chain_id: self.chain_id,
        })
    }

    fn get_global_properties(&self) -> Result<GlobalProperties, GatewayError> {
        self.check()?;
        Ok(GlobalProperties {
            current_fees: self.fees.clone(),
        })
    }

    fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties, GatewayError> {
        self.check()?;
        Ok(DynamicGlobalProperties {
            head_block_number: self.head_block_id.block_num(),
            head_block_id: self.head_block_id,
            time: TimePointSec::from_secs(1_700_000_000),
        })
    }
}

/// Broadcaster that records what it was given.
#[cfg(test)]
#[derive(Default)]
pub struct MockBroadcaster {
    pub sent: parking_lot::Mutex<Vec<SignedTransaction>>,
    pub reject_with: Option<String>,
}

#[cfg(test)]
impl Broadcaster for MockBroadcaster {
    fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<(), GatewayError> {
        if let Some(reason) = &self.reject_with {
            return Err(GatewayError::Rejected(reason.clone()));
        }
        self.sent.lock().push(transaction.clone());
        Ok(())
    }
}
