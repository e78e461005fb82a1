//! Password credential service — one-way hashing at signup, verification
//! at signin.
//!
//! Comparison runs through bcrypt's own constant-time check. A stored
//! hash that fails to parse verifies as `false` rather than erroring, so
//! the caller sees the same undifferentiated "invalid credentials"
//! outcome as a plain mismatch.

use bcrypt::BcryptError;

/// Hash a plaintext password with the given bcrypt cost factor.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plain, cost)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plain, stored_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("Aa1!aaaa", TEST_COST).unwrap();
        assert!(verify_password("Aa1!aaaa", &hash));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("Aa1!aaaa", TEST_COST).unwrap();
        assert!(!verify_password("Aa1!aaab", &hash));
    }

    #[test]
    fn hash_is_not_the_plaintext() {
        let hash = hash_password("Aa1!aaaa", TEST_COST).unwrap();
        assert_ne!(hash, "Aa1!aaaa");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn same_password_hashes_differently() {
        // Per-hash salt: two hashes of the same input must differ.
        let h1 = hash_password("Aa1!aaaa", TEST_COST).unwrap();
        let h2 = hash_password("Aa1!aaaa", TEST_COST).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn garbage_stored_hash_verifies_false() {
        assert!(!verify_password("Aa1!aaaa", "not-a-bcrypt-hash"));
    }
}
