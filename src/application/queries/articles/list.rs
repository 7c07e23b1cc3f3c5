// src/application/queries/articles/list.rs
use super::{comments::MOST_DISCUSSED_LIMIT, service::ArticleQueryService};
use crate::{
    application::{
        dto::{ArticleListDto, PageRequest},
        error::ApplicationResult,
    },
    domain::article::ArticlePage,
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    /// Raw `activePage` value; absent means the first page.
    pub active_page: Option<String>,
}

impl ArticleQueryService {
    /// Front page listing: one page of articles plus the most discussed ones.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let page = PageRequest::parse(query.active_page.as_deref())?;
        let ArticlePage { items, total } = self.article_repo.list_page(page.window()).await?;
        let pages_count = page.ensure_in_range(total)?;

        let most_discussed = self.article_repo.most_discussed(MOST_DISCUSSED_LIMIT).await?;

        Ok(ArticleListDto {
            articles: self.shaper.project_all(&items),
            most_discussed_articles: most_discussed.into_iter().map(Into::into).collect(),
            articles_count: total,
            pages_count,
        })
    }
}
