pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId, NewComment};
pub use repository::CommentRepository;
