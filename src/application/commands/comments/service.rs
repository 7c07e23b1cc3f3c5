// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{dates::DateNormalizer, ports::ClockPort, shaping::ResponseShaper},
    domain::{article::ArticleReadRepository, comment::CommentRepository, user::UserRepository},
};

pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) dates: DateNormalizer,
    pub(super) shaper: ResponseShaper,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
        dates: DateNormalizer,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            user_repo,
            clock,
            dates,
            shaper: ResponseShaper::new(dates),
        }
    }
}
