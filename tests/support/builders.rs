// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use blog_core::domain::article::{Article, ArticleId, ArticleTitle};
use blog_core::domain::category::Category;
use blog_core::domain::user::UserId;
use serde_json::{Value, json};

use super::mocks::fixed_now;

pub const VALID_TITLE: &str = "Как начать программировать на Rust за один вечер";
pub const VALID_ANNOUNCE: &str = "Короткий анонс статьи, который длиннее тридцати символов";
pub const VALID_COMMENT: &str = "Отличная статья, спасибо за подробный разбор!";

pub struct ArticleBuilder {
    title: String,
    announce: String,
    author_id: i64,
    categories: Vec<Category>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: VALID_TITLE.into(),
            announce: VALID_ANNOUNCE.into(),
            author_id: 1,
            categories: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn category(mut self, category: &Category) -> Self {
        self.categories.push(category.clone());
        self
    }

    /// Places the article `days` before the fixed "now".
    pub fn days_ago(mut self, days: i64) -> Self {
        self.created_at = fixed_now() - Duration::days(days);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            announce: self.announce,
            full_text: None,
            picture: None,
            author_id: UserId::new(self.author_id).unwrap(),
            categories: self.categories,
            comments: None,
            created_at: self.created_at,
        }
    }
}

pub fn article_form(category_ids: &[i64], author_id: i64) -> Value {
    json!({
        "title": VALID_TITLE,
        "announce": VALID_ANNOUNCE,
        "fullText": "Полный текст статьи.",
        "categories": category_ids,
        "createdDate": "01.02.2024",
        "picture": "cover.png",
        "userId": author_id
    })
}

pub fn registration_form(email: &str) -> Value {
    json!({
        "firstname": "Анна",
        "lastname": "Иванова",
        "email": email,
        "password": "secret42",
        "confirmPassword": "secret42"
    })
}
