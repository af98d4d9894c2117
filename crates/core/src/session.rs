//! Opaque bearer session tokens.
//!
//! A session token is 32 random bytes rendered as 64 lowercase hex
//! characters. The plaintext is returned to the client once; only its
//! SHA-256 digest is stored, so a database leak does not expose live
//! sessions.

use chrono::Duration;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::types::Timestamp;

/// Number of random bytes in a session token.
pub const TOKEN_BYTES: usize = 32;

/// Default session lifetime in hours.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Default lifetime in days for "remember me" sessions.
pub const DEFAULT_REMEMBER_DAYS: i64 = 30;

/// How long newly created sessions stay valid.
#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub ttl: Duration,
    pub remember_ttl: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::hours(DEFAULT_TTL_HOURS),
            remember_ttl: Duration::days(DEFAULT_REMEMBER_DAYS),
        }
    }
}

impl SessionPolicy {
    /// Expiry instant for a session created at `now`.
    pub fn expires_at(&self, now: Timestamp, remember: bool) -> Timestamp {
        if remember {
            now + self.remember_ttl
        } else {
            now + self.ttl
        }
    }
}

/// Generate a fresh session token.
///
/// Returns `(plaintext, sha256_hex_hash)`.
pub fn generate_token() -> (String, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    let plaintext = to_hex(&bytes);
    let hash = hash_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest of a session token, as stored in `sessions.token_hash`.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn token_shape() {
        let (plaintext, hash) = generate_token();
        assert_eq!(plaintext.len(), TOKEN_BYTES * 2);
        assert!(plaintext.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hash.len(), 64);
        assert_ne!(plaintext, hash);
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_token();
        let (b, _) = generate_token();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_stable() {
        let (plaintext, hash) = generate_token();
        assert_eq!(hash_token(&plaintext), hash);
    }

    #[test]
    fn remember_extends_expiry() {
        let policy = SessionPolicy::default();
        let now = Utc::now();
        assert_eq!(policy.expires_at(now, false) - now, Duration::hours(24));
        assert_eq!(policy.expires_at(now, true) - now, Duration::days(30));
    }
}
