// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleListDto, ArticleView, CategoryArticlesDto, CommentView, DiscussedArticleDto},
    queries::articles::{
        GetArticleQuery, ListArticlesQuery, ListCategoryArticlesQuery, ListUserArticlesQuery,
        ListUserCommentedArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{FormPayload, NumericId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(rename = "activePage")]
    pub active_page: Option<String>,
}

/// Article form as submitted by the editor.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
    pub title: String,
    pub announce: String,
    pub full_text: Option<String>,
    pub categories: Vec<i64>,
    /// `DD.MM.YYYY`
    pub created_date: String,
    pub picture: Option<String>,
    pub user_id: i64,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(("activePage" = Option<i64>, Query, description = "1-based page number")),
    responses(
        (status = 200, description = "One page of articles.", body = ArticleListDto),
        (status = 400, description = "Malformed page number.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Page past the last one.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticleListDto>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            active_page: params.active_page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/comments",
    responses(
        (status = 200, description = "Articles with the most comments.", body = [DiscussedArticleDto])
    ),
    tag = "Articles"
)]
pub async fn most_discussed(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<DiscussedArticleDto>>> {
    state
        .services
        .article_queries
        .most_discussed()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{articleId}",
    params(("articleId" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its comments.", body = ArticleView),
        (status = 400, description = "Non-numeric id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    NumericId(id): NumericId,
) -> HttpResult<Json<ArticleView>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleForm,
    responses(
        (status = 201, description = "Article created.", body = ArticleView),
        (status = 400, description = "Form rejected.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    FormPayload(payload): FormPayload,
) -> HttpResult<(StatusCode, Json<ArticleView>)> {
    state
        .services
        .article_commands
        .create_article(CreateArticleCommand { payload })
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{articleId}",
    params(("articleId" = i64, Path, description = "Article id")),
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Article updated.", body = ArticleView),
        (status = 400, description = "Form rejected.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    NumericId(id): NumericId,
    FormPayload(payload): FormPayload,
) -> HttpResult<Json<ArticleView>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{articleId}",
    params(("articleId" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The deleted article.", body = ArticleView),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    NumericId(id): NumericId,
) -> HttpResult<Json<ArticleView>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/category/{categoryId}",
    params(
        ("categoryId" = i64, Path, description = "Category id"),
        ("activePage" = Option<i64>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "One page of the category's articles.", body = CategoryArticlesDto),
        (status = 404, description = "Category or page not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_by_category(
    Extension(state): Extension<HttpState>,
    NumericId(category_id): NumericId,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CategoryArticlesDto>> {
    state
        .services
        .article_queries
        .list_by_category(ListCategoryArticlesQuery {
            category_id,
            active_page: params.active_page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/users/{userId}",
    params(("userId" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Articles written by the user.", body = [ArticleView]),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_user_articles(
    Extension(state): Extension<HttpState>,
    NumericId(user_id): NumericId,
) -> HttpResult<Json<Vec<ArticleView>>> {
    state
        .services
        .article_queries
        .list_by_user(ListUserArticlesQuery { user_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/users/{userId}/comments",
    params(("userId" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The user's articles that have comments, comments included.", body = [ArticleView]),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_user_commented_articles(
    Extension(state): Extension<HttpState>,
    NumericId(user_id): NumericId,
) -> HttpResult<Json<Vec<ArticleView>>> {
    state
        .services
        .article_queries
        .list_commented_by_user(ListUserCommentedArticlesQuery { user_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/users/comments",
    responses(
        (status = 200, description = "Newest comments across all articles.", body = [CommentView])
    ),
    tag = "Comments"
)]
pub async fn latest_comments(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CommentView>>> {
    state
        .services
        .article_queries
        .latest_comments()
        .await
        .into_http()
        .map(Json)
}
