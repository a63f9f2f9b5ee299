//! # Transaction Subsystem
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Binds operations to a reference block and expiration window, attaches
//! fees, signs with one or more keys and validates the result before it is
//! handed to transport.
//!
//! ## State Machine
//!
//! ```text
//! [Empty] → [Built] → [Feed] → [Signed] → [Validated]
//! ```
//!
//! | Transition | Method | Failure |
//! |------------|--------|---------|
//! | → Built | `add_operation()` | `FrozenTransaction` once signed |
//! | → Feed | `compute_fees()` | `IncompleteTransaction` without operations |
//! | → Signed | `sign()` | `IncompleteTransaction` before fees, reference block or expiration |
//! | → Validated | `validate()` | operation errors, signature/operation bounds |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Digest covers chain id and every field | `domain/transaction.rs` - `signature_digest()` |
//! | Order of operations and signatures preserved | `domain/assembler.rs` - append-only `Vec`s |
//! | Signed transactions are immutable | `domain/assembler.rs` - `ensure_mutable()` |
//! | Canonical low-S recoverable signatures | `shared-crypto` - `PrivateKey::sign_compact()` |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `ChainQuery` | Chain id, fee table, head block |
//! | `Broadcaster` | Submit the signed transaction |
//! | `TimeSource` | "Now" for the expiration window |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::TransactionService;
