//! Study note records

use super::validation::{Checker, Field, ValidationError};
use super::Record;
use serde::{Deserialize, Serialize};

/// A free-text study note, as stored in the notes file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub subject: String,
    pub content: String,
}

impl Record for Note {
    const KIND: &'static str = "note";
}

/// Raw values proposed for a new note.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub subject: String,
    pub content: String,
}

impl NoteDraft {
    pub fn validate(self) -> Result<Note, ValidationError> {
        let mut checker = Checker::default();
        let subject = checker.required(Field::Subject, self.subject);
        let content = checker.required(Field::Content, self.content);
        checker.finish()?;

        Ok(Note { subject, content })
    }
}
