//! In-memory ports shared by the scenarios.

use parking_lot::Mutex;
use quill_telemetry::TelemetryConfig;
use ql_02_fee_schedule::FeeSchedule;
use ql_05_transaction::{
    AssemblerConfig, Broadcaster, ChainProperties, ChainQuery, DynamicGlobalProperties,
    GatewayError, GlobalProperties, NetworkProfile, SignedTransaction, TimeSource,
    TransactionService,
};
use ql_06_registrar::{AccountRecord, WalletGateway};
use shared_crypto::PrivateKey;
use shared_types::{BlockId, ChainId, TimePointSec};

pub const CHAIN_ID: ChainId = ChainId([0x17; 32]);
pub const NOW: TimePointSec = TimePointSec::from_secs(1_700_000_000);
pub const HEAD_BLOCK: u32 = 0x0001_2345;

pub type Service = TransactionService<InMemoryChain, RecordingBroadcaster, FixedClock>;

pub fn key(seed: u8) -> PrivateKey {
    PrivateKey::from_bytes([seed; 32]).unwrap()
}

/// Block id carrying `number` big-endian in its first four bytes.
pub fn block_id(number: u32) -> BlockId {
    let mut bytes = [0xAB; 20];
    bytes[..4].copy_from_slice(&number.to_be_bytes());
    BlockId(bytes)
}

pub struct InMemoryChain {
    pub chain_id: ChainId,
    pub fees: FeeSchedule,
    pub head: DynamicGlobalProperties,
}

impl Default for InMemoryChain {
    fn default() -> Self {
        Self {
            chain_id: CHAIN_ID,
            fees: FeeSchedule::default(),
            head: DynamicGlobalProperties {
                head_block_number: HEAD_BLOCK,
                head_block_id: block_id(HEAD_BLOCK),
                time: NOW,
            },
        }
    }
}

impl ChainQuery for InMemoryChain {
    fn get_chain_properties(&self) -> Result<ChainProperties, GatewayError> {
        Ok(ChainProperties {
            chain_id: self.chain_id,
        })
    }

    fn get_global_properties(&self) -> Result<GlobalProperties, GatewayError> {
        Ok(GlobalProperties {
            current_fees: self.fees.clone(),
        })
    }

    fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties, GatewayError> {
        Ok(self.head.clone())
    }
}

#[derive(Default)]
pub struct RecordingBroadcaster {
    pub sent: Mutex<Vec<SignedTransaction>>,
}

impl Broadcaster for RecordingBroadcaster {
    fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<(), GatewayError> {
        self.sent.lock().push(transaction.clone());
        Ok(())
    }
}

pub struct FixedClock(pub TimePointSec);

impl TimeSource for FixedClock {
    fn now(&self) -> TimePointSec {
        self.0
    }
}

pub fn transaction_service() -> Service {
    // Only the first scenario in this binary installs the subscriber.
    let _ = quill_telemetry::init_logging(&TelemetryConfig::for_component("tests"));
    TransactionService::new(
        InMemoryChain::default(),
        RecordingBroadcaster::default(),
        AssemblerConfig::default(),
        NetworkProfile::TESTNET,
    )
    .with_time_source(FixedClock(NOW))
}

/// Wallet holding a fixed set of known accounts, some of them its own.
#[derive(Default)]
pub struct InMemoryWallet {
    pub accounts: Vec<AccountRecord>,
    pub owned: Vec<String>,
}

impl InMemoryWallet {
    pub fn with_account(mut self, record: AccountRecord, owned: bool) -> Self {
        if owned {
            self.owned.push(record.name.clone());
        }
        self.accounts.push(record);
        self
    }
}

impl WalletGateway for InMemoryWallet {
    fn get_account(&self, name: &str) -> Result<Option<AccountRecord>, GatewayError> {
        Ok(self.accounts.iter().find(|a| a.name == name).cloned())
    }

    fn list_my_accounts(&self) -> Result<Vec<AccountRecord>, GatewayError> {
        Ok(self
            .accounts
            .iter()
            .filter(|a| self.owned.contains(&a.name))
            .cloned()
            .collect())
    }
}
