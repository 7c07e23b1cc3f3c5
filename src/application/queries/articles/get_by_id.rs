// src/application/queries/articles/get_by_id.rs
use super::service::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleView> {
        let raw_id = query.id;
        let id = ArticleId::new(raw_id).map_err(|_| ApplicationError::article_not_found(raw_id))?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(raw_id))?;

        Ok(self.shaper.project(&article))
    }
}
