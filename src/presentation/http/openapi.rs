// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::most_discussed,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::list_by_category,
        crate::presentation::http::controllers::articles::list_user_articles,
        crate::presentation::http::controllers::articles::list_user_commented_articles,
        crate::presentation::http::controllers::articles::latest_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::search::search,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleForm,
            crate::presentation::http::controllers::comments::CommentForm,
            crate::presentation::http::controllers::users::RegisterForm,
            crate::presentation::http::controllers::users::LoginForm,
            crate::application::validation::ValidationReport,
            crate::application::dto::ArticleView,
            crate::application::dto::ArticleListDto,
            crate::application::dto::CategoryArticlesDto,
            crate::application::dto::DiscussedArticleDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::CommentView,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and editing"),
        (name = "Comments", description = "Article comments"),
        (name = "Categories", description = "Category catalogue"),
        (name = "Search", description = "Title search"),
        (name = "Users", description = "Registration and login"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog API",
        description = "Blog backend: articles, comments, categories, search and users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
