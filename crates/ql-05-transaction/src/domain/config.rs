//! Assembler limits and network profiles.

use shared_types::{AssetId, Price, CORE_ASSET};
use std::env;

/// Limits applied while assembling a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Upper bound on signatures per transaction.
    pub max_signatures: usize,
    /// Upper bound on operations per transaction.
    pub max_operations: usize,
    /// Expiration distance from "now" used by the service.
    pub expiration_window_secs: u32,
    /// Bound on account-to-account authority resolution.
    pub max_authority_depth: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_signatures: 15,
            max_operations: 100,
            expiration_window_secs: 30,
            max_authority_depth: ql_01_authority::DEFAULT_MAX_DEPTH,
        }
    }
}

impl AssemblerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QUILL_MAX_SIGNATURES` (default: 15)
    /// - `QUILL_MAX_OPERATIONS` (default: 100)
    /// - `QUILL_EXPIRATION_SECS` (default: 30)
    /// - `QUILL_MAX_AUTHORITY_DEPTH` (default: 2)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|v| v.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            max_signatures: parse(lookup("QUILL_MAX_SIGNATURES"))
                .unwrap_or(defaults.max_signatures),
            max_operations: parse(lookup("QUILL_MAX_OPERATIONS"))
                .unwrap_or(defaults.max_operations),
            expiration_window_secs: parse(lookup("QUILL_EXPIRATION_SECS"))
                .unwrap_or(defaults.expiration_window_secs),
            max_authority_depth: parse(lookup("QUILL_MAX_AUTHORITY_DEPTH"))
                .unwrap_or(defaults.max_authority_depth),
        }
    }

    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_signatures: 4,
            max_operations: 4,
            ..Self::default()
        }
    }
}

/// A named network and the asset that pays its fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    pub name: &'static str,
    pub core_asset: AssetId,
}

impl NetworkProfile {
    pub const MAINNET: NetworkProfile = NetworkProfile {
        name: "mainnet",
        core_asset: CORE_ASSET,
    };

    pub const TESTNET: NetworkProfile = NetworkProfile {
        name: "testnet",
        core_asset: CORE_ASSET,
    };

    /// Looks a profile up by name.
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" => Some(Self::MAINNET),
            "testnet" => Some(Self::TESTNET),
            _ => None,
        }
    }

    /// 1:1 price of the core asset, used to charge fees directly in it.
    pub fn unit_price(&self) -> Price {
        Price::unit(self.core_asset)
    }
}
