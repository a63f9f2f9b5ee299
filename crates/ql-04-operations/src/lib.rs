//! # Operations Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Strongly typed chain operations and their local field rules. Every
//! operation owns a `fee` slot that the fee schedule fills before signing.
//!
//! ## Variants
//!
//! | Variant | Payload | Validation |
//! |---------|---------|------------|
//! | `Transfer` | `Transfer` | positive amount, account/content receiver, memo size |
//! | `CustomMessage` | `Custom` (subtype 1) | payer sole authority, non-empty receivers |
//! | `AccountRegister` | `AccountCreate` | name shape, single-key authorities |
//! | `AccountRegisterMultisig` | `AccountCreate` | name shape, valid authorities |
//!
//! All fees must be paid in the core asset.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | `validate()` is pure | `domain/operation.rs` - takes `&self` only |
//! | Exhaustive kind mapping | `domain/operation.rs` - `kind()`, `payload_size()` |
//! | Name shape | `domain/account.rs` - `validate_account_name()` |

pub mod domain;

pub use domain::*;
