// src/application/validation/mod.rs
//! Declarative form validation.
//!
//! Every form kind maps to a static table of field rules (see [`rules`]).
//! The engine walks that table in declaration order and never performs I/O:
//! checks that depend on stored records read a [`LookupSnapshot`] the caller
//! fills beforehand.

mod checks;
pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use utoipa::ToSchema;

use crate::application::error::{ApplicationError, ApplicationResult};

pub use rules::{FormKind, rules_for};

/// Record sets consulted by uniqueness and existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey {
    UserEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Integer,
    /// A non-empty list of integer ids, or a single id.
    IdList,
    /// A `DD.MM.YYYY` calendar date.
    Date,
    Email,
    Letters,
    ImageFile,
    EqualsField(&'static str),
    /// The value must not be present in the snapshot.
    Unique(LookupKey),
    /// The value must be present in the snapshot.
    Registered(LookupKey),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    /// Skip every check when the field is absent, null or blank.
    pub optional: bool,
    pub rules: &'static [Rule],
}

impl FieldRule {
    pub const fn required(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            optional: false,
            rules,
        }
    }

    pub const fn optional(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            optional: true,
            rules,
        }
    }
}

/// Values already known to the data store, keyed by the record set they
/// belong to. Values are compared trimmed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct LookupSnapshot {
    known: HashMap<LookupKey, HashSet<String>>,
}

impl LookupSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: LookupKey, value: &str) {
        self.known
            .entry(key)
            .or_default()
            .insert(normalize_lookup(value));
    }

    pub fn with(mut self, key: LookupKey, value: &str) -> Self {
        self.record(key, value);
        self
    }

    pub fn contains(&self, key: LookupKey, value: &str) -> bool {
        self.known
            .get(&key)
            .is_some_and(|values| values.contains(&normalize_lookup(value)))
    }
}

fn normalize_lookup(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Failed rules of one submission, flat and grouped by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors_list: Vec<String>,
    pub error_by_field: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn from_failures(failures: &[Failure]) -> Self {
        let mut report = Self::default();
        for failure in failures {
            report.push(failure.field, failure.message);
        }
        report
    }

    /// Appends a failure; the by-field map keeps the first message per field.
    pub fn push(&mut self, field: &str, message: &str) {
        self.errors_list.push(message.to_string());
        self.error_by_field
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors_list.is_empty()
    }

    /// `Ok(())` when nothing failed, otherwise an invalid form error
    /// carrying this report.
    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidForm(self))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub field: &'static str,
    pub message: &'static str,
}

/// Evaluates `rules` against `payload` and returns every failing rule in
/// declaration order.
pub fn evaluate(rules: &[FieldRule], payload: &Value, lookups: &LookupSnapshot) -> Vec<Failure> {
    let mut failures = Vec::new();

    for field_rule in rules {
        let value = payload.get(field_rule.field);
        if field_rule.optional && checks::is_blank(value) {
            continue;
        }

        for rule in field_rule.rules {
            if !checks::passes(rule.check, value, payload, lookups) {
                failures.push(Failure {
                    field: field_rule.field,
                    message: rule.message,
                });
            }
        }
    }

    failures
}

/// List-level form of [`run`]: messages of every failing rule for `kind`,
/// in declaration order.
pub fn validate(kind: FormKind, payload: &Value, lookups: &LookupSnapshot) -> Vec<String> {
    evaluate(rules_for(kind), payload, lookups)
        .into_iter()
        .map(|failure| failure.message.to_string())
        .collect()
}

/// Map-level form of [`run`]: first failing message for each field of `kind`.
pub fn validate_by_field(
    kind: FormKind,
    payload: &Value,
    lookups: &LookupSnapshot,
) -> BTreeMap<String, String> {
    ValidationReport::from_failures(&evaluate(rules_for(kind), payload, lookups)).error_by_field
}

/// Both views of the evaluation in one pass.
pub fn run(kind: FormKind, payload: &Value, lookups: &LookupSnapshot) -> ValidationReport {
    ValidationReport::from_failures(&evaluate(rules_for(kind), payload, lookups))
}

/// String form of a scalar field; numbers and booleans are rendered,
/// containers and nulls are treated as absent.
pub fn field_text(payload: &Value, field: &str) -> Option<String> {
    checks::text(payload.get(field)).map(|text| text.trim().to_string())
}

/// Like [`field_text`] but blank strings become `None`.
pub fn optional_text(payload: &Value, field: &str) -> Option<String> {
    field_text(payload, field).filter(|text| !text.is_empty())
}

pub fn field_integer(payload: &Value, field: &str) -> Option<i64> {
    checks::integer(payload.get(field))
}

pub fn field_ids(payload: &Value, field: &str) -> Option<Vec<i64>> {
    checks::id_list(payload.get(field))
}
