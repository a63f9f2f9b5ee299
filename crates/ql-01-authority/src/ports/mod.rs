//! Ports layer for the Authority subsystem.
//!
//! - Outbound (Driven) ports: account authority lookup

pub mod outbound;

pub use outbound::*;
