//! Credential hashing.

use sha2::{Digest, Sha256};

/// Hashes a raw credential into the lowercase hex SHA-256 digest that is
/// stored for a user.
pub fn hash_credential(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_credential("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_is_64_hex_chars() {
        let digest = hash_credential("s3cr3t");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_different_inputs_differ() {
        assert_ne!(hash_credential("one"), hash_credential("two"));
    }
}
