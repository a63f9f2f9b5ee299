//! # Brain Keys
//!
//! A brain key is a word phrase from which account keys are derived
//! deterministically. The phrase is normalized before use, so spacing and
//! letter case do not change the derived keys.
//!
//! ```text
//! normalized = UPPER(words joined by single spaces)
//! key(seq)   = SHA-256(SHA-512(normalized || " " || seq))
//! owner      = key(brain, 0)
//! active     = key(WIF(owner), 0)
//! memo       = active
//! ```

use super::errors::RegistrarError;
use bip39::Language;
use rand::Rng;
use shared_crypto::{sha256, sha512, PrivateKey, PublicKey};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Words in a generated brain key.
pub const BRAIN_KEY_WORD_COUNT: usize = 16;

/// Normalized brain-key phrase. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BrainKey(String);

impl BrainKey {
    /// Normalizes `phrase`: trims, collapses whitespace runs and uppercases.
    pub fn new(phrase: &str) -> Result<Self, RegistrarError> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return Err(RegistrarError::EmptyBrainKey);
        }
        Ok(Self(normalized))
    }

    /// Random phrase of [`BRAIN_KEY_WORD_COUNT`] English BIP-39 words.
    pub fn generate() -> Self {
        let words = Language::English.word_list();
        let mut rng = rand::thread_rng();
        let phrase = (0..BRAIN_KEY_WORD_COUNT)
            .map(|_| words[rng.gen_range(0..words.len())])
            .collect::<Vec<_>>()
            .join(" ");
        Self(phrase.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').count()
    }

    /// Key number `sequence` of this brain key.
    pub fn derive_private_key(&self, sequence: u32) -> Result<PrivateKey, RegistrarError> {
        derive_private_key(&self.0, sequence)
    }
}

impl fmt::Debug for BrainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrainKey(<redacted>, {} words)", self.word_count())
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Derives a key from an arbitrary prefix, used verbatim.
pub fn derive_private_key(prefix: &str, sequence: u32) -> Result<PrivateKey, RegistrarError> {
    let mut seed = format!("{prefix} {sequence}");
    let stretched = sha512(seed.as_bytes());
    seed.zeroize();
    Ok(PrivateKey::from_bytes(sha256(&stretched))?)
}

/// Owner key pair of a brain-key phrase. Equal phrases up to spacing and
/// case yield the same pair.
pub fn derive_identity(phrase: &str) -> Result<(PrivateKey, PublicKey), RegistrarError> {
    let key = BrainKey::new(phrase)?.derive_private_key(0)?;
    let public = key.public_key();
    Ok((key, public))
}

/// The three keys a new account is registered with.
#[derive(Debug, Clone)]
pub struct AccountKeys {
    pub owner: PrivateKey,
    pub active: PrivateKey,
    pub memo: PrivateKey,
}

impl AccountKeys {
    pub fn from_brain_key(brain_key: &BrainKey) -> Result<Self, RegistrarError> {
        let owner = brain_key.derive_private_key(0)?;
        let mut owner_wif = owner.to_wif();
        let active = derive_private_key(&owner_wif, 0);
        owner_wif.zeroize();
        let active = active?;

        debug!(owner = %owner.public_key(), active = %active.public_key(), "Derived account keys");
        Ok(Self {
            owner,
            memo: active.clone(),
            active,
        })
    }

    pub fn owner_public(&self) -> PublicKey {
        self.owner.public_key()
    }

    pub fn active_public(&self) -> PublicKey {
        self.active.public_key()
    }

    pub fn memo_public(&self) -> PublicKey {
        self.memo.public_key()
    }
}
