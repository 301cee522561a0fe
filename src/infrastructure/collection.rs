//! In-memory collection with write-through persistence

use crate::domain::Record;
use crate::error::Result;
use crate::infrastructure::CollectionStore;

/// One collection held for the length of a single interaction.
///
/// The collection is the only writer of its file. After every successful
/// `append` the stored file equals `records()`.
#[derive(Debug)]
pub struct Collection<T, S> {
    store: S,
    name: String,
    records: Vec<T>,
}

impl<T: Record, S: CollectionStore> Collection<T, S> {
    /// Load the named collection, starting empty if it was never saved.
    pub fn open(store: S, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let records = store.load(&name)?;
        Ok(Collection {
            store,
            name,
            records,
        })
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Append a record and flush the whole collection.
    ///
    /// Returns only after the save has completed. If it fails the record is
    /// dropped again and the error returned.
    pub fn append(&mut self, record: T) -> Result<()> {
        self.records.push(record);
        if let Err(e) = self.store.save(&self.name, &self.records) {
            self.records.pop();
            log::warn!(
                "Failed to save {} collection {}, discarded new {}: {e}",
                T::KIND,
                self.name,
                T::KIND
            );
            return Err(e);
        }
        log::debug!(
            "Appended {} #{} to {}",
            T::KIND,
            self.records.len(),
            self.name
        );
        Ok(())
    }
}
