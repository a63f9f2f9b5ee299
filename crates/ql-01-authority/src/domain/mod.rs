//! # Domain Layer - Authority Subsystem
//!
//! ## Components
//!
//! - `authority`: Authority value, multisig builder, SignerSet
//! - `evaluator`: weight accumulation with bounded account recursion
//! - `errors`: AuthorityError enumeration

pub mod authority;
pub mod errors;
pub mod evaluator;

pub use authority::*;
pub use errors::*;
pub use evaluator::*;
