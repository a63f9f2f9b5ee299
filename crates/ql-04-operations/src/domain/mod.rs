//! # Domain Layer - Operations Subsystem
//!
//! ## Components
//!
//! - `transfer`: Transfer with optional memo
//! - `custom`: Custom operation and the messaging payload
//! - `account`: AccountCreate, AccountOptions, name rules
//! - `operation`: Operation sum type, fee slot access
//! - `errors`: OperationError enumeration

pub mod account;
pub mod custom;
pub mod errors;
pub mod operation;
pub mod transfer;

pub use account::*;
pub use custom::*;
pub use errors::*;
pub use operation::*;
pub use transfer::*;
