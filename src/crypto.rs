//! One-way password hashing.
//!
//! Passwords are stored as the lowercase hex SHA-256 digest of the plaintext
//! (64 characters). Verification compares digests in constant time.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a stored password hash (hex-encoded SHA-256).
pub const PASSWORD_HASH_LEN: usize = 64;

/// Hash a plaintext password, returns lowercase hex string.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    if stored_hash.len() != PASSWORD_HASH_LEN {
        return false;
    }
    let computed = hash_password(password);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}
