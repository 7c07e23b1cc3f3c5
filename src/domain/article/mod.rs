pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticlePage, ArticleUpdate, DiscussedArticle, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, PageWindow};
pub use value_objects::{ArticleId, ArticleTitle};
