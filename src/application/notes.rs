//! Manage notes use cases

use crate::domain::{Note, NoteDraft};
use crate::error::Result;
use crate::infrastructure::{Collection, CollectionStore};

/// Service for adding and viewing study notes
pub struct NoteService<S> {
    store: S,
    file: String,
}

impl<S: CollectionStore> NoteService<S> {
    pub fn new(store: S, file: impl Into<String>) -> Self {
        NoteService {
            store,
            file: file.into(),
        }
    }

    /// Validate, append and save a note; see `BookService::add`.
    pub fn add(&self, draft: NoteDraft) -> Result<Note> {
        let note = draft.validate()?;
        let mut notes = Collection::open(&self.store, self.file.as_str())?;
        notes.append(note.clone())?;
        log::info!("Added note '{}' ({} total)", note.subject, notes.len());
        Ok(note)
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        Ok(Collection::<Note, _>::open(&self.store, self.file.as_str())?.into_records())
    }
}
