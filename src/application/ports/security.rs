// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Returns `Ok(false)` on a mismatch; errors are reserved for unreadable hashes.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
