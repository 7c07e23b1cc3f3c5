// src/application/commands/articles/delete.rs
use super::service::ArticleCommandService;
use crate::application::{dto::ArticleView, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletes an article and returns it as it was before deletion.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<ArticleView> {
        let existing = self.existing_article(command.id).await?;
        self.write_repo.delete(existing.id).await?;

        tracing::info!(article_id = %existing.id, "article deleted");
        Ok(self.shaper.project(&existing))
    }
}
