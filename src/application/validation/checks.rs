use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::{Check, LookupSnapshot};
use crate::application::dates::INPUT_DATE_FORMAT;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Letters of any script, with inner spaces, apostrophes and hyphens.
static LETTERS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}+(?:[\s'-]\p{L}+)*$").expect("LETTERS_REGEX: invalid regex pattern")
});

static IMAGE_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:jpe?g|png)$").expect("IMAGE_FILE_REGEX: invalid regex pattern")
});

pub(super) fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(super) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        other => text(other).is_none_or(|s| s.trim().is_empty()),
    }
}

pub(super) fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(super) fn id_list(value: Option<&Value>) -> Option<Vec<i64>> {
    match value? {
        Value::Array(items) if !items.is_empty() => {
            items.iter().map(|item| integer(Some(item))).collect()
        }
        Value::Array(_) => None,
        scalar => integer(Some(scalar)).map(|id| vec![id]),
    }
}

fn char_len(value: Option<&Value>) -> usize {
    text(value).map_or(0, |s| s.trim().chars().count())
}

pub(super) fn passes(
    check: Check,
    value: Option<&Value>,
    payload: &Value,
    lookups: &LookupSnapshot,
) -> bool {
    match check {
        Check::Required => !is_blank(value),
        Check::MinLength(min) => char_len(value) >= min,
        Check::MaxLength(max) => char_len(value) <= max,
        Check::Integer => integer(value).is_some(),
        Check::IdList => id_list(value).is_some(),
        Check::Date => text(value)
            .is_some_and(|s| NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).is_ok()),
        Check::Email => text(value).is_some_and(|s| EMAIL_REGEX.is_match(s.trim())),
        Check::Letters => text(value).is_some_and(|s| LETTERS_REGEX.is_match(s.trim())),
        Check::ImageFile => text(value).is_some_and(|s| IMAGE_FILE_REGEX.is_match(s.trim())),
        Check::EqualsField(other) => match (text(value), text(payload.get(other))) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        },
        Check::Unique(key) => text(value).is_none_or(|s| !lookups.contains(key, &s)),
        Check::Registered(key) => text(value).is_some_and(|s| lookups.contains(key, &s)),
    }
}
