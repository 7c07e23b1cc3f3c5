// src/application/commands/articles/create.rs
use serde_json::Value;

use super::{form::ArticleForm, service::ArticleCommandService};
use crate::application::{dto::ArticleView, error::ApplicationResult};

pub struct CreateArticleCommand {
    pub payload: Value,
}

impl ArticleCommandService {
    /// Creates an article once the form is valid and both the author and
    /// every category exist.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleView> {
        let form = ArticleForm::parse(&command.payload, &self.dates, self.clock.now())?;
        self.ensure_categories(form.category_ids()).await?;
        self.ensure_author(form.author_id()).await?;

        let created = self.write_repo.insert(form.into_new_article()).await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(self.shaper.project(&created))
    }
}
