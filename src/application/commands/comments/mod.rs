// src/application/commands/comments/mod.rs
mod create;
mod delete;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
