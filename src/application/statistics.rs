//! Library statistics use case

use crate::domain::{Book, LibraryStats};
use crate::error::Result;
use crate::infrastructure::{Collection, CollectionStore};

/// Compute read/unread counts over the named books file.
pub fn library_statistics<S: CollectionStore>(store: S, books_file: &str) -> Result<LibraryStats> {
    let books = Collection::<Book, _>::open(store, books_file)?;
    Ok(LibraryStats::from_books(books.records()))
}
