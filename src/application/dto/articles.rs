use crate::domain::article::DiscussedArticle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, CommentView};

/// Client-facing article with dates rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: i64,
    pub title: String,
    pub announce: String,
    pub full_text: Option<String>,
    pub picture: Option<String>,
    pub user_id: i64,
    pub categories: Vec<CategoryDto>,
    /// `DD.MM.YYYY, HH:mm`
    pub created_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscussedArticleDto {
    pub id: i64,
    pub title: String,
    pub announce: String,
    pub comments_count: u64,
}

impl From<DiscussedArticle> for DiscussedArticleDto {
    fn from(article: DiscussedArticle) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            announce: article.announce,
            comments_count: article.comments_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleView>,
    pub most_discussed_articles: Vec<DiscussedArticleDto>,
    pub articles_count: u64,
    pub pages_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryArticlesDto {
    pub active_category: CategoryDto,
    pub articles: Vec<ArticleView>,
    pub articles_count: u64,
    pub pages_count: u64,
}
