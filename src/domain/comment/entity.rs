use crate::domain::article::ArticleId;
use crate::domain::errors::positive_id;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

positive_id!(CommentId, "comment");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
