// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// Reversible stand-in for Argon2 so tests stay fast.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

impl PlainPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("plain${password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(Self::hash_of(password) == expected_hash)
    }
}
