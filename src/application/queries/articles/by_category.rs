// src/application/queries/articles/by_category.rs
use super::service::ArticleQueryService;
use crate::{
    application::{
        dto::{CategoryArticlesDto, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticlePage, category::CategoryId},
};

pub struct ListCategoryArticlesQuery {
    pub category_id: i64,
    pub active_page: Option<String>,
}

impl ArticleQueryService {
    /// Articles of one category. The category is resolved before the page is
    /// checked, so an unknown category reports 404 for any page.
    pub async fn list_by_category(
        &self,
        query: ListCategoryArticlesQuery,
    ) -> ApplicationResult<CategoryArticlesDto> {
        let page = PageRequest::parse(query.active_page.as_deref())?;

        let raw_id = query.category_id;
        let id =
            CategoryId::new(raw_id).map_err(|_| ApplicationError::category_not_found(raw_id))?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::category_not_found(raw_id))?;

        let ArticlePage { items, total } =
            self.article_repo.list_by_category(id, page.window()).await?;
        let pages_count = page.ensure_in_range(total)?;

        Ok(CategoryArticlesDto {
            active_category: category.into(),
            articles: self.shaper.project_all(&items),
            articles_count: total,
            pages_count,
        })
    }
}
