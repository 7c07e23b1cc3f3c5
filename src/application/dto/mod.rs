pub mod articles;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod users;

pub use articles::{ArticleListDto, ArticleView, CategoryArticlesDto, DiscussedArticleDto};
pub use categories::{CategoryDto, CategorySummaryDto};
pub use comments::CommentView;
pub use pagination::{ARTICLES_PER_PAGE, PageRequest};
pub use users::UserDto;
