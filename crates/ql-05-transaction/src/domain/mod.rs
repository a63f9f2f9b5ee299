//! # Domain Layer - Transaction Subsystem
//!
//! ## Components
//!
//! - `transaction`: Transaction, SignedTransaction, digest and id
//! - `assembler`: TransactionAssembler state machine
//! - `config`: AssemblerConfig, NetworkProfile
//! - `errors`: TransactionError enumeration

pub mod assembler;
pub mod config;
pub mod errors;
pub mod transaction;

pub use assembler::*;
pub use config::*;
pub use errors::*;
pub use transaction::*;
