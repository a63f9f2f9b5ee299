//! Outbound (Driven) ports for the Memo subsystem.

use parking_lot::Mutex;
use shared_crypto::PublicKey;
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Supplies memo nonces for a sender.
pub trait NonceSource: Send + Sync {
    /// Next nonce for `sender`; never repeats a value previously returned
    /// for the same sender.
    fn next_nonce(&self, sender: &PublicKey) -> u64;
}

/// Time-seeded counter scoped per sender.
///
/// Each nonce is the current time in microseconds, bumped past the last
/// value handed out for that sender so it strictly increases even when the
/// clock stalls or goes backwards.
#[derive(Debug, Default)]
pub struct MonotonicNonceSource {
    last: Mutex<HashMap<PublicKey, u64>>,
}

impl MonotonicNonceSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for MonotonicNonceSource {
    fn next_nonce(&self, sender: &PublicKey) -> u64 {
        let now = clamp_micros(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default(),
        );

        let mut last = self.last.lock();
        let entry = last.entry(*sender).or_insert(0);
        *entry = now.max(entry.saturating_add(1));
        *entry
    }
}

fn clamp_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
