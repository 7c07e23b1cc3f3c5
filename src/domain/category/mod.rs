pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategorySummary};
pub use repository::CategoryRepository;
