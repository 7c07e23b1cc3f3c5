// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::CommentView,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{FormPayload, NumericId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentForm {
    pub text: String,
    pub user_id: i64,
}

#[utoipa::path(
    post,
    path = "/api/articles/{articleId}/comments",
    params(("articleId" = i64, Path, description = "Article id")),
    request_body = CommentForm,
    responses(
        (status = 201, description = "Comment created.", body = CommentView),
        (status = 400, description = "Form rejected.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    NumericId(article_id): NumericId,
    FormPayload(payload): FormPayload,
) -> HttpResult<(StatusCode, Json<CommentView>)> {
    state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            article_id,
            payload,
        })
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/articles/comments/{commentId}",
    params(("commentId" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The deleted comment.", body = CommentView),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    NumericId(id): NumericId,
) -> HttpResult<Json<CommentView>> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()
        .map(Json)
}
