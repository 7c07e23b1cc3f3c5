// src/application/queries/articles/search.rs
use super::service::ArticleQueryService;
use crate::application::{
    dto::ArticleView,
    error::{ApplicationError, ApplicationResult},
    shaping::highlight,
};

pub const INVALID_SEARCH_QUERY: &str = "Invalid data sent";

#[derive(Debug, Clone, Default)]
pub struct SearchArticlesQuery {
    pub query: Option<String>,
}

impl ArticleQueryService {
    /// Title search. Every hit comes back with the first occurrence of the
    /// query wrapped in emphasis tags.
    pub async fn search(&self, query: SearchArticlesQuery) -> ApplicationResult<Vec<ArticleView>> {
        let Some(text) = query.query else {
            return Err(ApplicationError::validation(INVALID_SEARCH_QUERY));
        };

        let found = self.article_repo.search_by_title(&text).await?;
        tracing::debug!(query = %text, hits = found.len(), "article search");
        Ok(highlight(&self.shaper.project_all(&found), &text))
    }
}
