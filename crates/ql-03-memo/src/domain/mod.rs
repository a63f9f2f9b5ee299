//! # Domain Layer - Memo Subsystem
//!
//! - `codec`: Memo envelope, MemoCodec, key schedule
//! - `errors`: MemoError enumeration

pub mod codec;
pub mod errors;

pub use codec::*;
pub use errors::*;
