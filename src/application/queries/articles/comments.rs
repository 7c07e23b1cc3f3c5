// src/application/queries/articles/comments.rs
use super::service::ArticleQueryService;
use crate::application::{
    dto::{CommentView, DiscussedArticleDto},
    error::ApplicationResult,
};

pub const MOST_DISCUSSED_LIMIT: u64 = 4;
pub const LATEST_COMMENTS_LIMIT: u64 = 4;

impl ArticleQueryService {
    pub async fn most_discussed(&self) -> ApplicationResult<Vec<DiscussedArticleDto>> {
        let articles = self.article_repo.most_discussed(MOST_DISCUSSED_LIMIT).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Newest comments across all articles.
    pub async fn latest_comments(&self) -> ApplicationResult<Vec<CommentView>> {
        let comments = self.comment_repo.latest(LATEST_COMMENTS_LIMIT).await?;
        Ok(self.shaper.project_comments(&comments))
    }
}
