//! Manage books use cases

use crate::domain::{Book, BookDraft};
use crate::error::Result;
use crate::infrastructure::{Collection, CollectionStore};

/// Service for adding and viewing books
pub struct BookService<S> {
    store: S,
    file: String,
}

impl<S: CollectionStore> BookService<S> {
    /// Create a service over the named books file
    pub fn new(store: S, file: impl Into<String>) -> Self {
        BookService {
            store,
            file: file.into(),
        }
    }

    /// Validate the draft, append it, and save the collection.
    ///
    /// Nothing is loaded or written when validation fails. The book is
    /// returned only once the save has completed.
    pub fn add(&self, draft: BookDraft) -> Result<Book> {
        let book = draft.validate()?;
        let mut books = Collection::open(&self.store, self.file.as_str())?;
        books.append(book.clone())?;
        log::info!("Added book '{}' ({} total)", book.title, books.len());
        Ok(book)
    }

    /// All books in insertion order
    pub fn list(&self) -> Result<Vec<Book>> {
        Ok(Collection::<Book, _>::open(&self.store, self.file.as_str())?.into_records())
    }
}
