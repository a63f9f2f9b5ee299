//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed (wrong key, wrong nonce or tampered ciphertext)
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Signing primitive rejected the digest
    #[error("Signing failed")]
    SigningFailed,

    /// Invalid signature format
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Signature has a high S value
    #[error("Non-canonical signature (high S value)")]
    MalleableSignature,

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Text encoding could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Embedded checksum does not match the payload
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}
