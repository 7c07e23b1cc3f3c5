// src/application/commands/users/register.rs
use serde_json::Value;

use super::service::{UserCommandService, password_field};
use crate::{
    application::{
        dto::UserDto,
        error::ApplicationResult,
        validation::{self, FormKind, field_text, optional_text},
    },
    domain::user::{Email, NewUser, PasswordHash},
};

pub struct RegisterUserCommand {
    pub payload: Value,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let payload = &command.payload;
        let (lookups, _) = self.lookup_email(payload).await?;
        validation::run(FormKind::NewUser, payload, &lookups).into_result()?;

        let email = Email::new(field_text(payload, "email").unwrap_or_default())?;
        let hashed = self
            .password_hasher
            .hash(&password_field(payload, "password"))
            .await?;

        let user = self
            .user_repo
            .insert(NewUser {
                first_name: field_text(payload, "firstname").unwrap_or_default(),
                last_name: field_text(payload, "lastname").unwrap_or_default(),
                email,
                password_hash: PasswordHash::new(hashed)?,
                avatar: optional_text(payload, "avatar"),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user.into())
    }
}
