//! # Memo Codec
//!
//! A memo is encrypted for exactly two parties. Both derive the same
//! symmetric key from ECDH between their key pairs, so either side can
//! decode with its own private key and the other side's public key.
//!
//! ## Key Schedule
//!
//! ```text
//! shared   = SHA-512(ECDH(sk_self, pk_other).x)
//! material = SHA-512(decimal(nonce) || hex(shared))
//! key      = material[0..32]
//! iv       = material[32..56]          // XChaCha20 nonce
//! ```
//!
//! The memo nonce must not repeat for the same pair of keys. Reuse is not
//! detected here; see `ports::NonceSource` for a generator that avoids it.

use super::errors::MemoError;
use serde::{Deserialize, Serialize};
use shared_crypto::{
    decrypt, encrypt, sha512, CryptoError, Nonce, PrivateKey, PublicKey, SecretKey,
};

/// Largest plaintext accepted by [`MemoCodec::encode`].
pub const MAX_MESSAGE_SIZE: usize = 2048;

/// Encrypted message envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub from: PublicKey,
    pub to: PublicKey,
    pub nonce: u64,
    /// Ciphertext including the authentication tag.
    pub message: Vec<u8>,
}

impl Memo {
    /// Size of the ciphertext in bytes.
    pub fn size(&self) -> usize {
        self.message.len()
    }
}

/// Encodes and decodes [`Memo`] envelopes.
pub struct MemoCodec;

impl MemoCodec {
    /// Encrypts `plaintext` from `sender` to `receiver`.
    pub fn encode(
        plaintext: &[u8],
        sender: &PrivateKey,
        receiver: &PublicKey,
        nonce: u64,
    ) -> Result<Memo, MemoError> {
        if plaintext.len() > MAX_MESSAGE_SIZE {
            return Err(MemoError::MessageTooLarge {
                size: plaintext.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let (key, iv) = derive_cipher(sender, receiver, nonce)?;
        let message = encrypt(&key, &iv, plaintext)?;

        Ok(Memo {
            from: sender.public_key(),
            to: *receiver,
            nonce,
            message,
        })
    }

    /// Decrypts `memo` with one party's private key and the other party's
    /// public key.
    ///
    /// # Errors
    ///
    /// `Decryption` if the tag does not verify. No plaintext is returned in
    /// that case.
    pub fn decode(
        memo: &Memo,
        private_key: &PrivateKey,
        counterparty: &PublicKey,
    ) -> Result<Vec<u8>, MemoError> {
        let (key, iv) = derive_cipher(private_key, counterparty, memo.nonce)?;
        decrypt(&key, &iv, &memo.message).map_err(|e| match e {
            CryptoError::DecryptionFailed => MemoError::Decryption,
            other => MemoError::Crypto(other),
        })
    }

    /// [`decode`](Self::decode) for UTF-8 text.
    pub fn decode_text(
        memo: &Memo,
        private_key: &PrivateKey,
        counterparty: &PublicKey,
    ) -> Result<String, MemoError> {
        let bytes = Self::decode(memo, private_key, counterparty)?;
        String::from_utf8(bytes).map_err(|_| MemoError::InvalidUtf8)
    }
}

fn derive_cipher(
    private_key: &PrivateKey,
    counterparty: &PublicKey,
    nonce: u64,
) -> Result<(SecretKey, Nonce), MemoError> {
    let shared = private_key.shared_secret(counterparty)?;

    let mut seed = nonce.to_string().into_bytes();
    seed.extend_from_slice(hex::encode(shared.as_bytes()).as_bytes());
    let material = sha512(&seed);

    let mut key = [0u8; 32];
    key.copy_from_slice(&material[..32]);
    let mut iv = [0u8; 24];
    iv.copy_from_slice(&material[32..56]);

    Ok((SecretKey::from_bytes(key), Nonce::from_bytes(iv)))
}
