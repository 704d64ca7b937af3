//! API key generation.
//!
//! An API key is the only credential a user has. It is handed out once at
//! signup, sent back on every authenticated request as
//! `Authorization: ApiKey <key>`, and looked up by exact match.

use sha2::{Digest, Sha256};

/// Length of a generated key in characters.
pub const API_KEY_LEN: usize = 64;

/// Generate a fresh API key.
///
/// 32 random bytes are hashed with SHA-256 and hex encoded, giving a
/// 64-character lowercase hex string.
pub fn generate_api_key() -> String {
    let seed: [u8; 32] = rand::random();

    let mut hasher = Sha256::new();
    hasher.update(seed);

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercase_hex_of_fixed_length() {
        let key = generate_api_key();

        assert_eq!(key.len(), API_KEY_LEN);
        assert!(
            key.chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn keys_are_not_reused() {
        assert_ne!(generate_api_key(), generate_api_key());
    }
}
