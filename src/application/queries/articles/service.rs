// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{dates::DateNormalizer, shaping::ResponseShaper},
    domain::{
        article::ArticleReadRepository, category::CategoryRepository, comment::CommentRepository,
        user::UserRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) shaper: ResponseShaper,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        dates: DateNormalizer,
    ) -> Self {
        Self {
            article_repo,
            category_repo,
            comment_repo,
            user_repo,
            shaper: ResponseShaper::new(dates),
        }
    }
}
