use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub text: String,
    /// `DD.MM.YYYY, HH:mm`
    pub created_date: String,
}
