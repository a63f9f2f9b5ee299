//! # Authority Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Models who may authorize actions for an account tier: a weight threshold
//! over public keys and other accounts. Used to build single-key and
//! multisig authorities for account registration and to answer whether a
//! set of signers satisfies an authority.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Threshold ≥ 1, every weight ≥ 1 | `domain/authority.rs` - `Authority::validate()` |
//! | Sum of all weights ≥ threshold | `domain/authority.rs` - `Authority::validate()` |
//! | Empty authority never satisfied | `domain/authority.rs` - `Authority::null()` |
//! | Adding a signer never lowers weight | `domain/evaluator.rs` - additive accumulation |
//! | Account recursion is bounded | `domain/evaluator.rs` - path + depth counter |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `AuthorityResolver` | Active authority of an account named in `account_auths` |
//!
//! ## Module Structure
//!
//! ```text
//! ports/outbound.rs    - AuthorityResolver, KeysOnly
//! domain/authority.rs  - Authority, AuthorityBuilder, SignerSet
//! domain/evaluator.rs  - AuthorityEvaluator
//! domain/errors.rs     - AuthorityError
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
