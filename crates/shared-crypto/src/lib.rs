//! # Shared Crypto - Key Material and Primitives
//!
//! Thin wrappers over audited primitive crates; nothing here implements
//! curve or cipher math itself.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 | Compact recoverable signatures, ECDH, key text forms |
//! | `hashing` | SHA-256 / SHA-512 | Signature digests, checksums, key schedules |
//! | `symmetric` | XChaCha20-Poly1305 | Memo encryption |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization, recoverable
//! - **XChaCha20-Poly1305**: authenticated; tampering fails decryption

#![warn(missing_docs)]
#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod symmetric;

// Re-exports
pub use ecdsa::{CompactSignature, CompactSigner, PrivateKey, PublicKey, SharedSecret};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_many, sha512, Digest256, Digest512};
pub use symmetric::{decrypt, encrypt, Nonce, SecretKey};
