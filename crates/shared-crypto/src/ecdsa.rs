//! # ECDSA Key Material (secp256k1)
//!
//! Private/public key pair, compact recoverable signatures and ECDH.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization; high-S signatures are rejected on parse
//! - Compact signatures carry the recovery id, so the signer's public key
//!   is recoverable from signature + digest alone
//!
//! ## Text Forms
//!
//! - Private keys: WIF (base58check, version `0x80`, double SHA-256 checksum)
//! - Public keys: `DCT` prefix + base58(compressed key || 4-byte checksum)

use crate::hashing::{double_sha256, sha256, sha512, Digest256, Digest512};
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// Prefix of the textual public key form.
pub const PUBLIC_KEY_PREFIX: &str = "DCT";

/// WIF version byte for private keys.
const WIF_VERSION: u8 = 0x80;

/// Header base for compressed-key compact signatures (27 + 4).
const COMPACT_HEADER_BASE: u8 = 31;

// =============================================================================
// SIGNING CAPABILITY
// =============================================================================

/// Anything that can produce compact recoverable signatures.
///
/// Implemented by [`PrivateKey`]; hardware or remote signers plug in here.
pub trait CompactSigner {
    /// Public key matching the signatures produced.
    fn public_key(&self) -> PublicKey;

    /// Sign a 32-byte digest, returning a canonical recoverable signature.
    fn sign_compact(&self, digest: &Digest256) -> Result<CompactSignature, CryptoError>;
}

// =============================================================================
// PUBLIC KEY
// =============================================================================

/// Compressed secp256k1 public key (33 bytes).
///
/// Ordered by raw bytes, which is the canonical order inside authorities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey([u8; 33]);

impl PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        // Validate it's a valid compressed point
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; 33] = bytes.try_into().map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(array)
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(true);
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        Self(bytes)
    }

    fn to_verifying_key(self) -> Result<VerifyingKey, CryptoError> {
        VerifyingKey::from_sec1_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = Vec::with_capacity(37);
        payload.extend_from_slice(&self.0);
        payload.extend_from_slice(&sha256(&self.0)[..4]);
        write!(f, "{}{}", PUBLIC_KEY_PREFIX, bs58::encode(payload).into_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix(PUBLIC_KEY_PREFIX).ok_or_else(|| {
            CryptoError::InvalidEncoding(format!("missing {} prefix", PUBLIC_KEY_PREFIX))
        })?;
        let payload = bs58::decode(body)
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        if payload.len() != 37 {
            return Err(CryptoError::InvalidEncoding(format!(
                "expected 37 bytes, got {}",
                payload.len()
            )));
        }
        let (key, checksum) = payload.split_at(33);
        if sha256(key)[..4] != *checksum {
            return Err(CryptoError::ChecksumMismatch);
        }
        Self::from_slice(key)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        } else {
            let bytes: Vec<u8> = serde_with::As::<Bytes>::deserialize(deserializer)?;
            Self::from_slice(&bytes).map_err(de::Error::custom)
        }
    }
}

// =============================================================================
// COMPACT SIGNATURE
// =============================================================================

/// Compact recoverable signature: header byte (`31 + recovery_id`) || r || s.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactSignature(#[serde_as(as = "Bytes")] [u8; 65]);

impl CompactSignature {
    /// Parse raw bytes, rejecting bad headers and high-S values.
    pub fn from_bytes(bytes: [u8; 65]) -> Result<Self, CryptoError> {
        let signature = Self(bytes);
        signature.recovery_id()?;
        if !signature.is_canonical() {
            return Err(CryptoError::MalleableSignature);
        }
        Ok(signature)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// Recovery id encoded in the header byte.
    pub fn recovery_id(&self) -> Result<RecoveryId, CryptoError> {
        let header = self.0[0];
        if !(27..=34).contains(&header) {
            return Err(CryptoError::InvalidSignatureFormat);
        }
        RecoveryId::from_byte((header - 27) & 3).ok_or(CryptoError::InvalidSignatureFormat)
    }

    /// True when S is in the lower half of the curve order.
    pub fn is_canonical(&self) -> bool {
        match Signature::from_slice(&self.0[1..]) {
            Ok(signature) => signature.normalize_s().is_none(),
            Err(_) => false,
        }
    }

    /// Recover the public key that produced this signature over `digest`.
    pub fn recover(&self, digest: &Digest256) -> Result<PublicKey, CryptoError> {
        let recovery_id = self.recovery_id()?;
        let signature =
            Signature::from_slice(&self.0[1..]).map_err(|_| CryptoError::InvalidSignatureFormat)?;
        if signature.normalize_s().is_some() {
            return Err(CryptoError::MalleableSignature);
        }

        let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
            .map_err(|_| CryptoError::RecoveryFailed)?;
        Ok(PublicKey::from_verifying_key(&key))
    }
}

impl fmt::Debug for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactSignature({})", hex::encode(self.0))
    }
}

impl fmt::Display for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// =============================================================================
// PRIVATE KEY
// =============================================================================

/// secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generate random key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign a digest (deterministic RFC 6979), normalized to low S.
    pub fn sign_compact(&self, digest: &Digest256) -> Result<CompactSignature, CryptoError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| CryptoError::SigningFailed)?;

        // Negating S flips the parity of the recovered point
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let mut bytes = [0u8; 65];
        bytes[0] = COMPACT_HEADER_BASE + recovery_id.to_byte();
        bytes[1..].copy_from_slice(&signature.to_bytes());
        Ok(CompactSignature(bytes))
    }

    /// ECDH with `counterparty`; symmetric in the two key pairs.
    ///
    /// Returns SHA-512 of the shared point's x-coordinate.
    pub fn shared_secret(&self, counterparty: &PublicKey) -> Result<SharedSecret, CryptoError> {
        let their_key = counterparty.to_verifying_key()?;
        let shared = k256::ecdh::diffie_hellman(
            self.signing_key.as_nonzero_scalar(),
            their_key.as_affine(),
        );
        Ok(SharedSecret(sha512(shared.raw_secret_bytes().as_slice())))
    }

    /// Wallet import format.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(37);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.to_bytes());
        let checksum = double_sha256(&payload);
        payload.extend_from_slice(&checksum[..4]);
        let encoded = bs58::encode(&payload).into_string();
        payload.zeroize();
        encoded
    }

    /// Parse a WIF string.
    pub fn from_wif(wif: &str) -> Result<Self, CryptoError> {
        let mut payload = bs58::decode(wif.trim())
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

        let result = Self::from_wif_payload(&payload);
        payload.zeroize();
        result
    }

    fn from_wif_payload(payload: &[u8]) -> Result<Self, CryptoError> {
        if payload.len() != 37 {
            return Err(CryptoError::InvalidEncoding(format!(
                "expected 37 bytes, got {}",
                payload.len()
            )));
        }
        let (body, checksum) = payload.split_at(33);
        if double_sha256(body)[..4] != *checksum {
            return Err(CryptoError::ChecksumMismatch);
        }
        if body[0] != WIF_VERSION {
            return Err(CryptoError::InvalidEncoding(format!(
                "unexpected version byte {:#04x}",
                body[0]
            )));
        }

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&body[1..]);
        let key = Self::from_bytes(secret);
        secret.zeroize();
        key
    }
}

impl CompactSigner for PrivateKey {
    fn public_key(&self) -> PublicKey {
        PrivateKey::public_key(self)
    }

    fn sign_compact(&self, digest: &Digest256) -> Result<CompactSignature, CryptoError> {
        PrivateKey::sign_compact(self, digest)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>, {})", self.public_key())
    }
}

/// SHA-512 of an ECDH shared point.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret(Digest512);

impl SharedSecret {
    pub fn as_bytes(&self) -> &Digest512 {
        &self.0
    }
}
