use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    application::{
        dates::{DateInput, DateNormalizer},
        error::{ApplicationError, ApplicationResult},
        validation::{
            self, FormKind, LookupSnapshot, field_ids, field_integer, field_text, optional_text,
        },
    },
    domain::{
        article::{ArticleId, ArticleTitle, ArticleUpdate, NewArticle},
        category::CategoryId,
        errors::DomainResult,
        user::UserId,
    },
};

/// Article fields read from a submitted form that passed validation.
pub(super) struct ArticleForm {
    title: ArticleTitle,
    announce: String,
    full_text: Option<String>,
    picture: Option<String>,
    author_id: UserId,
    category_ids: Vec<CategoryId>,
    created_at: DateTime<Utc>,
}

impl ArticleForm {
    pub(super) fn parse(
        payload: &Value,
        dates: &DateNormalizer,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Self> {
        validation::run(FormKind::NewArticle, payload, &LookupSnapshot::new()).into_result()?;

        let created_date = field_text(payload, "createdDate").unwrap_or_default();
        let created_at = dates
            .canonicalize(DateInput::Submitted(&created_date), now)
            .ok_or_else(|| {
                ApplicationError::validation(format!("invalid publication date '{created_date}'"))
            })?;

        let category_ids = field_ids(payload, "categories")
            .unwrap_or_default()
            .into_iter()
            .map(CategoryId::new)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            title: ArticleTitle::new(field_text(payload, "title").unwrap_or_default())?,
            announce: field_text(payload, "announce").unwrap_or_default(),
            full_text: optional_text(payload, "fullText"),
            picture: optional_text(payload, "picture"),
            author_id: UserId::new(field_integer(payload, "userId").unwrap_or_default())?,
            category_ids,
            created_at,
        })
    }

    pub(super) const fn author_id(&self) -> UserId {
        self.author_id
    }

    pub(super) fn category_ids(&self) -> &[CategoryId] {
        &self.category_ids
    }

    pub(super) fn into_new_article(self) -> NewArticle {
        NewArticle {
            title: self.title,
            announce: self.announce,
            full_text: self.full_text,
            picture: self.picture,
            author_id: self.author_id,
            category_ids: self.category_ids,
            created_at: self.created_at,
        }
    }

    pub(super) fn into_update(self, id: ArticleId) -> ArticleUpdate {
        ArticleUpdate {
            id,
            title: self.title,
            announce: self.announce,
            full_text: self.full_text,
            picture: self.picture,
            category_ids: self.category_ids,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T10:42:07Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn payload(created_date: &str) -> Value {
        json!({
            "title": "A title that easily clears the thirty character minimum",
            "announce": "An announce that also clears the thirty character minimum",
            "categories": ["2", 3],
            "createdDate": created_date,
            "picture": "",
            "userId": "5"
        })
    }

    #[test]
    fn parses_valid_form() {
        let form = ArticleForm::parse(&payload("01.02.2024"), &DateNormalizer::default(), now())
            .unwrap();
        let new_article = form.into_new_article();

        assert_eq!(new_article.author_id, UserId::new(5).unwrap());
        assert_eq!(
            new_article.category_ids,
            vec![CategoryId::new(2).unwrap(), CategoryId::new(3).unwrap()]
        );
        assert_eq!(new_article.picture, None);
        assert_eq!(
            new_article.created_at,
            DateTime::parse_from_rfc3339("2024-02-01T00:00:00Z").unwrap()
        );
    }

    #[test]
    fn todays_date_keeps_exact_time() {
        let form = ArticleForm::parse(&payload("15.03.2024"), &DateNormalizer::default(), now())
            .unwrap();
        assert_eq!(form.into_new_article().created_at, now());
    }

    #[test]
    fn invalid_form_is_rejected_with_report() {
        let result = ArticleForm::parse(&json!({}), &DateNormalizer::default(), now());
        match result {
            Err(ApplicationError::InvalidForm(report)) => {
                assert!(report.error_by_field.contains_key("title"));
                assert!(report.error_by_field.contains_key("createdDate"));
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected an invalid form"),
        }
    }
}
