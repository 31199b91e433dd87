//! Credential hashing behind the `PasswordHasher` seam.

use anyhow::{Context, Result};

/// Hashing seam for the signup handler.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password with the given work factor.
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String>;
}

/// bcrypt-backed production hasher.
#[derive(Clone, Debug)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String> {
        bcrypt::hash(plaintext, cost).context("failed to hash password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcrypt_hash_verifies_round_trip() -> Result<()> {
        // Minimum bcrypt cost keeps the test fast; production uses the configured default.
        let hash = BcryptHasher.hash("password123", 4)?;
        assert_ne!(hash, "password123");
        assert!(bcrypt::verify("password123", &hash)?);
        Ok(())
    }

    #[test]
    fn bcrypt_hash_salts_each_call() -> Result<()> {
        let first = BcryptHasher.hash("password123", 4)?;
        let second = BcryptHasher.hash("password123", 4)?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn bcrypt_hash_rejects_invalid_cost() {
        assert!(BcryptHasher.hash("password123", 1).is_err());
    }
}
