// src/application/commands/users/service.rs
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{ClockPort, PasswordHasherPort},
        validation::{LookupKey, LookupSnapshot, field_text},
    },
    domain::user::{Email, User, UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
        }
    }

    /// Resolves the submitted email against the store in a single round trip.
    /// The snapshot feeds the uniqueness and registration rules; the user, if
    /// any, is handed back so callers do not need a second lookup.
    pub(super) async fn lookup_email(
        &self,
        payload: &Value,
    ) -> ApplicationResult<(LookupSnapshot, Option<User>)> {
        let Some(email) = field_text(payload, "email").and_then(|raw| Email::new(raw).ok()) else {
            return Ok((LookupSnapshot::new(), None));
        };

        let existing = self.user_repo.find_by_email(&email).await?;
        let mut lookups = LookupSnapshot::new();
        if let Some(user) = &existing {
            lookups.record(LookupKey::UserEmail, user.email.as_str());
        }
        Ok((lookups, existing))
    }
}

/// Passwords are compared exactly as typed, without trimming.
pub(super) fn password_field(payload: &Value, field: &str) -> String {
    payload
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
