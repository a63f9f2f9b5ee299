//! # Memo Errors

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while encoding or decoding a memo.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemoError {
    /// Authentication failed: wrong key pair or corrupted ciphertext
    #[error("Memo decryption failed")]
    Decryption,

    /// Plaintext exceeds the supported length
    #[error("Memo message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },

    /// Decrypted bytes are not UTF-8 text
    #[error("Memo message is not valid UTF-8")]
    InvalidUtf8,

    /// Key agreement or cipher setup failed
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
