// src/application/commands/comments/create.rs
use serde_json::Value;

use super::service::CommentCommandService;
use crate::{
    application::{
        dates::DateInput,
        dto::CommentView,
        error::{ApplicationError, ApplicationResult},
        validation::{self, FormKind, LookupSnapshot, field_integer, field_text},
    },
    domain::{article::ArticleId, comment::NewComment, user::UserId},
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub payload: Value,
}

impl CommentCommandService {
    /// Adds a comment to an existing article. The article is looked up first;
    /// nothing is validated or written when it does not exist. The author is
    /// checked after validation.
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentView> {
        let raw_id = command.article_id;
        let article_id =
            ArticleId::new(raw_id).map_err(|_| ApplicationError::article_not_found(raw_id))?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::article_not_found(raw_id));
        }

        let payload = &command.payload;
        validation::run(FormKind::NewComment, payload, &LookupSnapshot::new()).into_result()?;

        let raw_author = field_integer(payload, "userId").unwrap_or_default();
        let author_id =
            UserId::new(raw_author).map_err(|_| ApplicationError::user_not_found(raw_author))?;
        if self.user_repo.find_by_id(author_id).await?.is_none() {
            return Err(ApplicationError::user_not_found(raw_author));
        }

        let created_at = self
            .dates
            .canonicalize(DateInput::Now, self.clock.now())
            .ok_or_else(|| ApplicationError::infrastructure("clock produced no timestamp"))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author_id,
                text: field_text(payload, "text").unwrap_or_default(),
                created_at,
            })
            .await?;

        tracing::info!(comment_id = %comment.id, article_id = %article_id, "comment created");
        Ok(self.shaper.project_comment(&comment))
    }
}
