// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormPayload;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Registered users.", body = [UserDto])
    ),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterForm,
    responses(
        (status = 201, description = "User registered.", body = UserDto),
        (status = 400, description = "Form rejected, including an email already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    FormPayload(payload): FormPayload,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    state
        .services
        .user_commands
        .register(RegisterUserCommand { payload })
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Credentials accepted.", body = UserDto),
        (status = 400, description = "Unknown email or wrong password.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    FormPayload(payload): FormPayload,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .login(LoginUserCommand { payload })
        .await
        .into_http()
        .map(Json)
}
