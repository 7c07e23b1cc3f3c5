// src/application/error.rs
use crate::application::validation::ValidationReport;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    /// A submitted form failed one or more field rules.
    #[error("invalid form: {} error(s)", .0.errors_list.len())]
    InvalidForm(ValidationReport),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("malformed parameter: {0}")]
    MalformedParameter(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedParameter(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn article_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("Article with id: {id} not found"))
    }

    pub fn comment_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("Comment with id: {id} not found"))
    }

    pub fn category_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("Category with id: {id} not found"))
    }

    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("User with id {id} not found"))
    }

    pub fn page_not_found(page: i64) -> Self {
        Self::not_found(format!("Page {page} not found"))
    }
}
