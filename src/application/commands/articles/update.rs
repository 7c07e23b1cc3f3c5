// src/application/commands/articles/update.rs
use serde_json::Value;

use super::{form::ArticleForm, service::ArticleCommandService};
use crate::application::{dto::ArticleView, error::ApplicationResult};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub payload: Value,
}

impl ArticleCommandService {
    /// Replaces an article's editable fields. A missing article is reported
    /// before the payload is looked at.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleView> {
        let existing = self.existing_article(command.id).await?;
        let form = ArticleForm::parse(&command.payload, &self.dates, self.clock.now())?;
        self.ensure_categories(form.category_ids()).await?;
        let updated = self.write_repo.update(form.into_update(existing.id)).await?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(self.shaper.project(&updated))
    }
}
