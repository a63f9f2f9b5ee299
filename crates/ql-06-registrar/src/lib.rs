//! # Registrar Subsystem
//!
//! **Subsystem ID:** 6
//!
//! ## Purpose
//!
//! Turns a brain key or a set of public keys into a signed account
//! registration paid by one of the wallet's own accounts.
//!
//! ## Key Derivation
//!
//! | Key | Derived from |
//! |-----|--------------|
//! | owner | normalized brain key, sequence 0 |
//! | active | WIF of the owner key, sequence 0 |
//! | memo | same as active |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Spacing and case never change derived keys | `domain/brain_key.rs` - `BrainKey::new()` |
//! | Brain keys wiped on drop | `domain/brain_key.rs` - `ZeroizeOnDrop` |
//! | Registrar belongs to this wallet | `service.rs` - `resolve_registrar()` |
//! | Names are never registered twice | `service.rs` - `ensure_available()` |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `WalletGateway` | Account lookup by name, wallet-owned accounts |
//! | `TransactionApi` | Assemble, sign and broadcast the registration |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::RegistrarService;
