// src/application/queries/articles/mod.rs
mod by_category;
mod by_user;
mod comments;
mod get_by_id;
mod list;
mod search;
mod service;

pub use by_category::ListCategoryArticlesQuery;
pub use by_user::{ListUserArticlesQuery, ListUserCommentedArticlesQuery};
pub use comments::{LATEST_COMMENTS_LIMIT, MOST_DISCUSSED_LIMIT};
pub use get_by_id::GetArticleQuery;
pub use list::ListArticlesQuery;
pub use search::{INVALID_SEARCH_QUERY, SearchArticlesQuery};
pub use service::ArticleQueryService;
