use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Most recent comments across all articles, newest first.
    async fn latest(&self, limit: u64) -> DomainResult<Vec<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
