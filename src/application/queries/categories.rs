// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{dto::CategorySummaryDto, error::ApplicationResult},
    domain::category::CategoryRepository,
};

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// All categories with the number of articles filed under each.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategorySummaryDto>> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
