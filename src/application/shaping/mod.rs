// src/application/shaping/mod.rs
//! Display projections of stored entities.
//!
//! Projections borrow the entities they render and build new views field by
//! field, so whatever the repository handed out stays untouched and can be
//! reused by the caller.

pub mod highlight;

use crate::application::dates::DateNormalizer;
use crate::application::dto::{ArticleView, CategoryDto, CommentView};
use crate::domain::{article::Article, comment::Comment};

pub use highlight::highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseShaper {
    dates: DateNormalizer,
}

impl ResponseShaper {
    pub const fn new(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    /// Projects a single article. Comments that were not loaded are rendered
    /// as an empty list so single-article responses keep a stable shape.
    pub fn project(&self, article: &Article) -> ArticleView {
        let mut view = self.view(article);
        if view.comments.is_none() {
            view.comments = Some(Vec::new());
        }
        view
    }

    /// Projects a listing. Articles without loaded comments keep the field
    /// absent.
    pub fn project_all(&self, articles: &[Article]) -> Vec<ArticleView> {
        articles.iter().map(|article| self.view(article)).collect()
    }

    pub fn project_comment(&self, comment: &Comment) -> CommentView {
        CommentView {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            user_id: comment.author_id.into(),
            text: comment.text.clone(),
            created_date: self.dates.display(&comment.created_at),
        }
    }

    pub fn project_comments(&self, comments: &[Comment]) -> Vec<CommentView> {
        comments
            .iter()
            .map(|comment| self.project_comment(comment))
            .collect()
    }

    fn view(&self, article: &Article) -> ArticleView {
        ArticleView {
            id: article.id.into(),
            title: article.title.to_string(),
            announce: article.announce.clone(),
            full_text: article.full_text.clone(),
            picture: article.picture.clone(),
            user_id: article.author_id.into(),
            categories: article.categories.iter().map(CategoryDto::from).collect(),
            created_date: self.dates.display(&article.created_at),
            comments: article
                .comments
                .as_deref()
                .map(|comments| self.project_comments(comments)),
        }
    }
}
