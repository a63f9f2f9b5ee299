//! Ports layer for the Registrar subsystem.
//!
//! - Inbound (Driving) ports: account creation API
//! - Outbound (Driven) ports: wallet account lookups

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
