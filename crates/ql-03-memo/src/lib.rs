//! # Memo Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Encrypts a short message between a sender and a receiver key pair into
//! an authenticated envelope attached to transfers and messaging payloads.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Shared key is order-independent | `domain/codec.rs` - ECDH in `derive_cipher()` |
//! | Tampering never yields plaintext | `domain/codec.rs` - AEAD tag check in `decode()` |
//! | Bounded plaintext | `domain/codec.rs` - `MAX_MESSAGE_SIZE` |
//!
//! ## Caller Contract
//!
//! A nonce must not be reused for the same pair of keys. The codec does not
//! track nonces; `MonotonicNonceSource` produces per-sender increasing ones.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
