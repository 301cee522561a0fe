//! Book records

use super::validation::{Checker, Field, ValidationError};
use super::{Record, Year};
use serde::{Deserialize, Serialize};

/// A book in the library, as stored in the books file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: Year,
    pub genre: String,
    pub read_status: bool,
}

impl Record for Book {
    const KIND: &'static str = "book";
}

/// Raw values proposed for a new book, before validation.
///
/// `year` is already range-constrained by its type; only the text fields
/// can still be rejected.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Year,
    pub genre: String,
    pub read_status: bool,
}

impl BookDraft {
    /// Check required fields and build the book.
    ///
    /// Every empty field is reported, not just the first one.
    pub fn validate(self) -> Result<Book, ValidationError> {
        let mut checker = Checker::default();
        let title = checker.required(Field::Title, self.title);
        let author = checker.required(Field::Author, self.author);
        let genre = checker.required(Field::Genre, self.genre);
        checker.finish()?;

        Ok(Book {
            title,
            author,
            year: self.year,
            genre,
            read_status: self.read_status,
        })
    }
}
