// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::category::{Category, CategoryId};
use crate::domain::comment::Comment;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub announce: String,
    pub full_text: Option<String>,
    pub picture: Option<String>,
    pub author_id: UserId,
    pub categories: Vec<Category>,
    /// `None` when the repository did not load the comments for this query.
    pub comments: Option<Vec<Comment>>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn has_comments(&self) -> bool {
        self.comments
            .as_ref()
            .is_some_and(|comments| !comments.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub announce: String,
    pub full_text: Option<String>,
    pub picture: Option<String>,
    pub author_id: UserId,
    pub category_ids: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable article fields.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub announce: String,
    pub full_text: Option<String>,
    pub picture: Option<String>,
    pub category_ids: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
}

/// One page of articles together with the size of the whole result set.
#[derive(Debug, Clone, Default)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussedArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub announce: String,
    pub comments_count: u64,
}
