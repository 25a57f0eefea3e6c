//! Field validation rules.
//!
//! Every rule is a pure check over a candidate value and the other values of
//! the form. Nothing here mutates state, so the same input always yields the
//! same [`Validation`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::{
    models::{FieldValue, FormValues},
    steps::FieldSpec,
};

/// Shape check only: something, an `@`, something, a dot, something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

/// Minimum trimmed length accepted by [`Rule::Phone`].
pub const MIN_PHONE_LENGTH: usize = 10;

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { message: String },
}

impl Validation {
    /// Whether the field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { message } => Some(message),
        }
    }
}

/// A single constraint on a field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Trimmed text must be non-empty; lists need one non-blank entry
    Required { message: String },

    /// Trimmed text must have at least `min` characters
    MinLength { min: usize, message: String },

    /// Text must look like an email address
    Email { message: String },

    /// Trimmed text must be at least [`MIN_PHONE_LENGTH`] characters long
    Phone { message: String },

    /// Value must be exactly `true`
    Accepted { message: String },

    /// Text must be one of the listed options
    OneOf {
        options: Vec<String>,
        message: String,
    },

    /// List must hold at least `min` non-blank entries
    MinFilled { min: usize, message: String },

    /// Apply `rule` only when sibling `field` holds the text `equals`
    When {
        field: String,
        equals: String,
        rule: Box<Rule>,
    },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    pub fn phone(message: impl Into<String>) -> Self {
        Rule::Phone {
            message: message.into(),
        }
    }

    pub fn accepted(message: impl Into<String>) -> Self {
        Rule::Accepted {
            message: message.into(),
        }
    }

    pub fn one_of(options: &[&str], message: impl Into<String>) -> Self {
        Rule::OneOf {
            options: options.iter().map(|o| (*o).to_string()).collect(),
            message: message.into(),
        }
    }

    pub fn min_filled(min: usize, message: impl Into<String>) -> Self {
        Rule::MinFilled {
            min,
            message: message.into(),
        }
    }

    /// Wrap `rule` so it only applies when `field == equals`.
    pub fn when(field: impl Into<String>, equals: impl Into<String>, rule: Rule) -> Self {
        Rule::When {
            field: field.into(),
            equals: equals.into(),
            rule: Box::new(rule),
        }
    }

    /// Check a candidate value against this rule.
    ///
    /// `value` is `None` when the field is unset. `values` gives access to
    /// sibling fields for conditional rules.
    pub fn check(&self, value: Option<&FieldValue>, values: &FormValues) -> Validation {
        let passed = match self {
            Rule::Required { .. } => value.is_some_and(|v| !v.is_blank()),
            Rule::MinLength { min, .. } => {
                trimmed_text(value).is_some_and(|t| !t.is_empty() && t.chars().count() >= *min)
            }
            Rule::Email { .. } => trimmed_text(value).is_some_and(|t| EMAIL_SHAPE.is_match(t)),
            Rule::Phone { .. } => {
                trimmed_text(value).is_some_and(|t| t.chars().count() >= MIN_PHONE_LENGTH)
            }
            Rule::Accepted { .. } => value.and_then(FieldValue::as_flag) == Some(true),
            Rule::OneOf { options, .. } => {
                trimmed_text(value).is_some_and(|t| options.iter().any(|o| o == t))
            }
            Rule::MinFilled { min, .. } => value
                .and_then(FieldValue::as_list)
                .map(|items| items.iter().filter(|i| !i.trim().is_empty()).count())
                .unwrap_or(0)
                >= *min,
            Rule::When {
                field,
                equals,
                rule,
            } => {
                if values.text(field).map(str::trim) != Some(equals.as_str()) {
                    return Validation::Valid;
                }
                return rule.check(value, values);
            }
        };

        if passed {
            Validation::Valid
        } else {
            Validation::Invalid {
                message: self.message().to_string(),
            }
        }
    }

    /// Message reported when this rule fails.
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::Email { message }
            | Rule::Phone { message }
            | Rule::Accepted { message }
            | Rule::OneOf { message, .. }
            | Rule::MinFilled { message, .. } => message,
            Rule::When { rule, .. } => rule.message(),
        }
    }

    /// Short human description, used when listing a step's fields.
    pub fn describe(&self) -> String {
        match self {
            Rule::Required { .. } => "required".to_string(),
            Rule::MinLength { min, .. } => format!("at least {min} characters"),
            Rule::Email { .. } => "email address".to_string(),
            Rule::Phone { .. } => format!("phone, at least {MIN_PHONE_LENGTH} characters"),
            Rule::Accepted { .. } => "must be accepted".to_string(),
            Rule::OneOf { options, .. } => format!("one of: {}", options.join(", ")),
            Rule::MinFilled { min, .. } => format!("at least {min} entries"),
            Rule::When {
                field,
                equals,
                rule,
            } => format!("{} when {field} is '{equals}'", rule.describe()),
        }
    }
}

fn trimmed_text(value: Option<&FieldValue>) -> Option<&str> {
    value.and_then(FieldValue::as_text).map(str::trim)
}

/// Validate a field against all of its rules, reporting the first failure.
///
/// A field with no rules is optional and always valid.
pub fn validate_field(spec: &FieldSpec, values: &FormValues) -> Validation {
    let value = values.get(&spec.name);
    spec.rules
        .iter()
        .map(|rule| rule.check(value, values))
        .find(|v| !v.is_valid())
        .unwrap_or(Validation::Valid)
}
