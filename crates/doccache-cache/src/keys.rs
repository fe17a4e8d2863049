//! Cache key derivation.
//!
//! Caller keys are hashed before they reach the store so every stored key
//! has the same length and charset, and raw key material never shows up
//! in store key listings.

use sha2::{Digest, Sha256};

/// Hash an arbitrary key into 64 lowercase hex characters (SHA-256).
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the physical store key for `key` under `namespace`.
pub fn storage_key(namespace: &str, key: &str) -> String {
    format!("{namespace}{}", hash_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_shape() {
        let long = "x".repeat(10_000);
        for key in ["", "user:42:profile", "ключ с пробелами", "🦀\n\t\0", long.as_str()] {
            let digest = hash_key(key);
            assert_eq!(digest.len(), 64, "key {key:?}");
            assert!(is_lower_hex(&digest), "key {key:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_key("user:42:profile"), hash_key("user:42:profile"));
    }

    #[test]
    fn test_distinct_keys_distinct_digests() {
        assert_ne!(hash_key("user:42:profile"), hash_key("user:43:profile"));
        assert_ne!(hash_key("a"), hash_key("a "));
    }

    #[test]
    fn test_storage_key_is_namespaced() {
        let key = storage_key("docs:", "abc");
        assert_eq!(
            key,
            "docs:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
