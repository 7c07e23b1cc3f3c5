use crate::domain::category::entity::{Category, CategoryId, CategorySummary};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<CategorySummary>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    /// Categories among `ids` that exist; unknown ids are left out.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
}
