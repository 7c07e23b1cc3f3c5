// src/application/validation/rules.rs
use super::{Check, FieldRule, LookupKey, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    NewArticle,
    NewComment,
    NewUser,
    Login,
}

pub const TITLE_MIN: usize = 30;
pub const TITLE_MAX: usize = 250;
pub const ANNOUNCE_MIN: usize = 30;
pub const ANNOUNCE_MAX: usize = 250;
pub const FULL_TEXT_MAX: usize = 1000;
pub const COMMENT_MIN: usize = 20;
pub const PASSWORD_MIN: usize = 6;

static NEW_ARTICLE: &[FieldRule] = &[
    FieldRule::required(
        "title",
        &[
            Rule::new(Check::Required, "Title is required"),
            Rule::new(
                Check::MinLength(TITLE_MIN),
                "Title must be at least 30 characters long",
            ),
            Rule::new(
                Check::MaxLength(TITLE_MAX),
                "Title must be at most 250 characters long",
            ),
        ],
    ),
    FieldRule::required(
        "announce",
        &[
            Rule::new(Check::Required, "Announce is required"),
            Rule::new(
                Check::MinLength(ANNOUNCE_MIN),
                "Announce must be at least 30 characters long",
            ),
            Rule::new(
                Check::MaxLength(ANNOUNCE_MAX),
                "Announce must be at most 250 characters long",
            ),
        ],
    ),
    FieldRule::optional(
        "fullText",
        &[Rule::new(
            Check::MaxLength(FULL_TEXT_MAX),
            "Full text must be at most 1000 characters long",
        )],
    ),
    FieldRule::required(
        "categories",
        &[Rule::new(Check::IdList, "Select at least one category")],
    ),
    FieldRule::required(
        "createdDate",
        &[
            Rule::new(Check::Required, "Publication date is required"),
            Rule::new(
                Check::Date,
                "Publication date must be in DD.MM.YYYY format",
            ),
        ],
    ),
    FieldRule::optional(
        "picture",
        &[Rule::new(
            Check::ImageFile,
            "Picture must be a jpg or png file",
        )],
    ),
    FieldRule::required(
        "userId",
        &[Rule::new(Check::Integer, "Author id must be an integer")],
    ),
];

static NEW_COMMENT: &[FieldRule] = &[
    FieldRule::required(
        "text",
        &[
            Rule::new(Check::Required, "Comment text is required"),
            Rule::new(
                Check::MinLength(COMMENT_MIN),
                "Comment must be at least 20 characters long",
            ),
        ],
    ),
    FieldRule::required(
        "userId",
        &[Rule::new(Check::Integer, "Author id must be an integer")],
    ),
];

static NEW_USER: &[FieldRule] = &[
    FieldRule::required(
        "firstname",
        &[
            Rule::new(Check::Required, "First name is required"),
            Rule::new(Check::Letters, "First name must contain only letters"),
        ],
    ),
    FieldRule::required(
        "lastname",
        &[
            Rule::new(Check::Required, "Last name is required"),
            Rule::new(Check::Letters, "Last name must contain only letters"),
        ],
    ),
    FieldRule::required(
        "email",
        &[
            Rule::new(Check::Required, "Email is required"),
            Rule::new(Check::Email, "Enter a valid email"),
            Rule::new(
                Check::Unique(LookupKey::UserEmail),
                "A user with this email is already registered",
            ),
        ],
    ),
    FieldRule::required(
        "password",
        &[
            Rule::new(Check::Required, "Password is required"),
            Rule::new(
                Check::MinLength(PASSWORD_MIN),
                "Password must be at least 6 characters long",
            ),
        ],
    ),
    FieldRule::required(
        "confirmPassword",
        &[
            Rule::new(Check::Required, "Password confirmation is required"),
            Rule::new(Check::EqualsField("password"), "Passwords do not match"),
        ],
    ),
    FieldRule::optional(
        "avatar",
        &[Rule::new(
            Check::ImageFile,
            "Avatar must be a jpg or png file",
        )],
    ),
];

static LOGIN: &[FieldRule] = &[
    FieldRule::required(
        "email",
        &[
            Rule::new(Check::Required, "Email is required"),
            Rule::new(Check::Email, "Enter a valid email"),
            Rule::new(
                Check::Registered(LookupKey::UserEmail),
                "User with this email is not registered",
            ),
        ],
    ),
    FieldRule::required(
        "password",
        &[Rule::new(Check::Required, "Password is required")],
    ),
];

pub fn rules_for(kind: FormKind) -> &'static [FieldRule] {
    match kind {
        FormKind::NewArticle => NEW_ARTICLE,
        FormKind::NewComment => NEW_COMMENT,
        FormKind::NewUser => NEW_USER,
        FormKind::Login => LOGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::{LookupSnapshot, validate, validate_by_field};
    use serde_json::{Value, json};

    fn valid_article() -> Value {
        json!({
            "title": "A title that easily clears the thirty character minimum",
            "announce": "An announce that also clears the thirty character minimum",
            "fullText": "Body",
            "categories": [1, 2],
            "createdDate": "01.02.2024",
            "picture": "cover.png",
            "userId": 1
        })
    }

    fn valid_user() -> Value {
        json!({
            "firstname": "Тестовый",
            "lastname": "Юзер",
            "email": "new@mail.ru",
            "password": "12345678",
            "confirmPassword": "12345678",
            "avatar": "avatar.jpg"
        })
    }

    #[test]
    fn every_form_has_rules() {
        for kind in [
            FormKind::NewArticle,
            FormKind::NewComment,
            FormKind::NewUser,
            FormKind::Login,
        ] {
            assert!(!rules_for(kind).is_empty(), "{kind:?} has no rules");
        }
    }

    #[test]
    fn valid_article_passes() {
        let errors = validate(FormKind::NewArticle, &valid_article(), &LookupSnapshot::new());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn short_title_and_bad_date_are_reported_in_order() {
        let mut payload = valid_article();
        payload["title"] = json!("Too short");
        payload["createdDate"] = json!("2024-02-01");

        let errors = validate(FormKind::NewArticle, &payload, &LookupSnapshot::new());
        assert_eq!(
            errors,
            vec![
                "Title must be at least 30 characters long",
                "Publication date must be in DD.MM.YYYY format",
            ]
        );
    }

    #[test]
    fn article_without_categories_is_rejected() {
        let mut payload = valid_article();
        payload["categories"] = json!([]);
        let by_field = validate_by_field(FormKind::NewArticle, &payload, &LookupSnapshot::new());
        assert_eq!(by_field["categories"], "Select at least one category");
    }

    #[test]
    fn short_comment_is_rejected() {
        let payload = json!({ "text": "Too short", "userId": 3 });
        let errors = validate(FormKind::NewComment, &payload, &LookupSnapshot::new());
        assert_eq!(errors, vec!["Comment must be at least 20 characters long"]);
    }

    #[test]
    fn user_registration_rules() {
        let lookups = LookupSnapshot::new();
        assert!(validate(FormKind::NewUser, &valid_user(), &lookups).is_empty());

        let mut payload = valid_user();
        payload["confirmPassword"] = json!("87654321");
        payload.as_object_mut().unwrap().remove("firstname");
        let by_field = validate_by_field(FormKind::NewUser, &payload, &lookups);
        assert_eq!(by_field["firstname"], "First name is required");
        assert_eq!(by_field["confirmPassword"], "Passwords do not match");
    }

    #[test]
    fn registration_rejects_taken_email() {
        let lookups = LookupSnapshot::new().with(LookupKey::UserEmail, "new@mail.ru");
        let by_field = validate_by_field(FormKind::NewUser, &valid_user(), &lookups);
        assert_eq!(
            by_field["email"],
            "A user with this email is already registered"
        );
    }

    #[test]
    fn login_requires_registered_email() {
        let payload = json!({ "email": "ghost@mail.ru", "password": "12345678" });
        let errors = validate(FormKind::Login, &payload, &LookupSnapshot::new());
        assert_eq!(errors, vec!["User with this email is not registered"]);

        let lookups = LookupSnapshot::new().with(LookupKey::UserEmail, "ghost@mail.ru");
        assert!(validate(FormKind::Login, &payload, &lookups).is_empty());
    }
}
