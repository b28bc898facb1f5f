use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::Field;

/// Error messages grouped by field. A field present in the map always has
/// at least one message.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);

        errors
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn first(&self, field: Field) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(value: ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();

        for (name, field_errors) in value.field_errors() {
            let field = Field::from_str(&name).unwrap_or(Field::Form);

            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field.label()));

                errors.push(field, message);
            }
        }

        errors
    }
}

/// Outcome of one submission attempt.
///
/// `SubmissionResult::default()` is the state before anything was submitted.
/// Results produced by [`submit_form`](crate::submit_form) always satisfy
/// `success == errors.is_empty()`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub errors: FieldErrors,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            success: true,
            errors: FieldErrors::new(),
        }
    }

    /// Failed attempt. An empty `errors` is replaced by a generic form error
    /// so that a failure never carries zero messages.
    pub fn failure(errors: FieldErrors) -> Self {
        let errors = if errors.is_empty() {
            FieldErrors::single(Field::Form, "Your message could not be sent")
        } else {
            errors
        };

        Self {
            success: false,
            errors,
        }
    }
}
