//! Rotating passcode derived from a shared secret and the current time bucket.
//!
//! The proctor and the quiz client compute the same code independently; there
//! is no server-side check. Anyone holding the secret can derive the code for
//! any bucket.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

pub const DEFAULT_SECRET: &str = "gsaarc";
pub const WINDOW_MS: i64 = 300_000;
pub const PASSCODE_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct PasscodeGenerator {
    secret: String,
    window_ms: i64,
}

impl PasscodeGenerator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_window(secret, WINDOW_MS)
    }

    /// A `window_ms` below 1 is raised to 1 so bucketing never divides by
    /// zero. `Config::validate` rejects a zero window before it gets here.
    pub fn with_window(secret: impl Into<String>, window_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            window_ms: window_ms.max(1),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    /// Floor of `now_ms / window_ms`, also for instants before the epoch.
    pub fn time_bucket(&self, now_ms: i64) -> i64 {
        now_ms.div_euclid(self.window_ms)
    }

    pub fn generate_at_ms(&self, now_ms: i64) -> String {
        let raw = format!("{}-{}", self.secret, self.time_bucket(now_ms));
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        let digest = hex_encode(&hasher.finalize());
        digest[..PASSCODE_LEN].to_uppercase()
    }

    pub fn generate(&self, now: DateTime<Utc>) -> String {
        self.generate_at_ms(now.timestamp_millis())
    }

    /// Only the current bucket is accepted. A code read out just before a
    /// window boundary stops working as soon as the boundary passes.
    pub fn verify(&self, entered: &str, now: DateTime<Utc>) -> bool {
        entered == self.generate(now)
    }

    /// Whole seconds until the current code rotates, rounded up.
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        let into_window = now.timestamp_millis().rem_euclid(self.window_ms);
        (self.window_ms - into_window + 999) / 1000
    }
}

impl Default for PasscodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
