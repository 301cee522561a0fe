//! Required-field validation shared by record drafts

use std::fmt;
use thiserror::Error;

/// A required text field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Genre,
    Subject,
    Content,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::Subject => "subject",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection of a draft because one or more required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    missing: Vec<Field>,
}

impl ValidationError {
    pub fn new(missing: Vec<Field>) -> Self {
        ValidationError { missing }
    }

    /// Empty fields, in the order they are declared on the record.
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects empty required fields while a draft is being checked.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    missing: Vec<Field>,
}

impl Checker {
    /// Trim `value`, recording `field` as missing when nothing is left.
    pub(crate) fn required(&mut self, field: Field, value: String) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.missing.push(field);
        }
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_string()
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.missing))
        }
    }
}
