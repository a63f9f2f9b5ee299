//! Ports layer for the Memo subsystem.
//!
//! - Outbound (Driven) ports: nonce generation

pub mod outbound;

pub use outbound::*;
