//! Ports layer for the Transaction subsystem.
//!
//! - Inbound (Driving) ports: API exposed to the registrar and callers
//! - Outbound (Driven) ports: chain query, broadcast, time

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
