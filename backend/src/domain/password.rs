//! Salted one-way password hashing.
//!
//! Hashes are stored as `salt$digest` with both halves hex encoded, where
//! `digest = SHA-256(salt || password)`. Plaintext never reaches the store.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

/// Stored password hash with its per-user salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a freshly generated random salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self(encode(&salt, password))
    }

    /// Wrap a stored hash read back from persistence.
    ///
    /// No shape validation happens here; a malformed value simply never
    /// verifies.
    pub fn from_storage(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    /// Check a plaintext password against this hash.
    pub fn verify(&self, password: &str) -> bool {
        let Some((salt_hex, _)) = self.0.split_once(SEPARATOR) else {
            return false;
        };
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        encode(&salt, password) == self.0
    }

    /// Stored representation, suitable for persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

fn encode(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{}{SEPARATOR}{}", hex::encode(salt), hex::encode(hasher.finalize()))
}
