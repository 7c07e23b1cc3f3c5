// src/presentation/http/controllers/search.rs
use crate::application::{dto::ArticleView, queries::articles::SearchArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(("query" = String, Query, description = "Text to look for in article titles")),
    responses(
        (status = 200, description = "Matching articles, first match in each title wrapped in <b>.", body = [ArticleView]),
        (status = 400, description = "`query` missing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ArticleView>>> {
    state
        .services
        .article_queries
        .search(SearchArticlesQuery {
            query: params.query,
        })
        .await
        .into_http()
        .map(Json)
}
