// src/application/commands/comments/delete.rs
use super::service::CommentCommandService;
use crate::{
    application::{
        dto::CommentView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<CommentView> {
        let raw_id = command.id;
        let id = CommentId::new(raw_id).map_err(|_| ApplicationError::comment_not_found(raw_id))?;
        let existing = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::comment_not_found(raw_id))?;

        self.comment_repo.delete(id).await?;

        tracing::info!(comment_id = %id, "comment deleted");
        Ok(self.shaper.project_comment(&existing))
    }
}
