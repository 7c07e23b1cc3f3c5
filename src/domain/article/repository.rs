use crate::domain::article::entity::{
    Article, ArticlePage, ArticleUpdate, DiscussedArticle, NewArticle,
};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Offset/limit slice requested from a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Article with its categories and comments loaded.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_page(&self, window: PageWindow) -> DomainResult<ArticlePage>;
    async fn list_by_category(
        &self,
        category_id: CategoryId,
        window: PageWindow,
    ) -> DomainResult<ArticlePage>;
    async fn most_discussed(&self, limit: u64) -> DomainResult<Vec<DiscussedArticle>>;
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
    /// Articles written by the author with their comments loaded.
    async fn list_by_author_with_comments(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>>;
}
