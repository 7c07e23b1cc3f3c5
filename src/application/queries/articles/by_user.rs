// src/application/queries/articles/by_user.rs
use super::service::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct ListUserArticlesQuery {
    pub user_id: i64,
}

/// Articles of a user that have at least one comment.
pub struct ListUserCommentedArticlesQuery {
    pub user_id: i64,
}

impl ArticleQueryService {
    pub async fn list_by_user(&self, query: ListUserArticlesQuery) -> ApplicationResult<Vec<ArticleView>> {
        let author_id = self.existing_user(query.user_id).await?;
        let articles = self.article_repo.list_by_author(author_id).await?;
        Ok(self.shaper.project_all(&articles))
    }

    pub async fn list_commented_by_user(
        &self,
        query: ListUserCommentedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let author_id = self.existing_user(query.user_id).await?;
        let mut articles = self
            .article_repo
            .list_by_author_with_comments(author_id)
            .await?;
        articles.retain(|article| article.has_comments());
        Ok(self.shaper.project_all(&articles))
    }

    async fn existing_user(&self, raw_id: i64) -> ApplicationResult<UserId> {
        let id = UserId::new(raw_id).map_err(|_| ApplicationError::user_not_found(raw_id))?;
        match self.user_repo.find_by_id(id).await? {
            Some(user) => Ok(user.id),
            None => Err(ApplicationError::user_not_found(raw_id)),
        }
    }
}
