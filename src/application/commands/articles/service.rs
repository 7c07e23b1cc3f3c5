// src/application/commands/articles/service.rs
use std::{collections::HashSet, sync::Arc};

use crate::{
    application::{
        dates::DateNormalizer,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
        shaping::ResponseShaper,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
        user::{UserId, UserRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) dates: DateNormalizer,
    pub(super) shaper: ResponseShaper,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
        dates: DateNormalizer,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            clock,
            dates,
            shaper: ResponseShaper::new(dates),
        }
    }

    /// Loads the article a mutation targets, or `Article with id: <id> not found`.
    pub(super) async fn existing_article(&self, raw_id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(raw_id).map_err(|_| ApplicationError::article_not_found(raw_id))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(raw_id))
    }

    /// Fails with `Category with id: <id> not found` for the first id in
    /// submission order that has no stored category.
    pub(super) async fn ensure_categories(&self, ids: &[CategoryId]) -> ApplicationResult<()> {
        let known: HashSet<CategoryId> = self
            .category_repo
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|category| category.id)
            .collect();

        match ids.iter().find(|id| !known.contains(id)) {
            Some(missing) => Err(ApplicationError::category_not_found(missing)),
            None => Ok(()),
        }
    }

    pub(super) async fn ensure_author(&self, id: UserId) -> ApplicationResult<()> {
        match self.user_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::user_not_found(id)),
        }
    }
}
