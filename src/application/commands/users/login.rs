// src/application/commands/users/login.rs
use serde_json::Value;

use super::service::{UserCommandService, password_field};
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
    validation::{self, FormKind, ValidationReport},
};

const WRONG_PASSWORD: &str = "Wrong password";

pub struct LoginUserCommand {
    pub payload: Value,
}

impl UserCommandService {
    /// Checks credentials. Both an unknown email and a wrong password are
    /// reported as form errors on the offending field.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let payload = &command.payload;
        let (lookups, existing) = self.lookup_email(payload).await?;
        validation::run(FormKind::Login, payload, &lookups).into_result()?;

        let user = existing.ok_or_else(|| ApplicationError::not_found("user is not registered"))?;
        let matches = self
            .password_hasher
            .verify(&password_field(payload, "password"), user.password_hash.as_str())
            .await?;

        if !matches {
            tracing::debug!(user_id = %user.id, "login rejected");
            let mut report = ValidationReport::default();
            report.push("password", WRONG_PASSWORD);
            return Err(ApplicationError::InvalidForm(report));
        }

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user.into())
    }
}
