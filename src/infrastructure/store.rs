//! JSON collection files

use crate::domain::Record;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};

/// Durable load/save of named collections.
pub trait CollectionStore {
    /// Load every record of the named collection, in stored order.
    /// A collection that was never saved is empty.
    fn load<T: Record>(&self, name: &str) -> Result<Vec<T>>;

    /// Replace the named collection with `records`.
    fn save<T: Record>(&self, name: &str, records: &[T]) -> Result<()>;
}

impl<S: CollectionStore + ?Sized> CollectionStore for &S {
    fn load<T: Record>(&self, name: &str) -> Result<Vec<T>> {
        (**self).load(name)
    }

    fn save<T: Record>(&self, name: &str, records: &[T]) -> Result<()> {
        (**self).save(name, records)
    }
}

/// Stores each collection as a JSON array in a file under `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Self {
        JsonFileStore { root }
    }

    /// Path of the file backing the named collection.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.shelf-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("collection.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ShelfError::Io(e)
        })
    }
}

impl CollectionStore for JsonFileStore {
    fn load<T: Record>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.path_for(name);
        log::debug!("Loading {} collection from {path:?}", T::KIND);

        let contents = match fs::read(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{path:?} does not exist yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ShelfError::Io(e)),
        };

        let records: Vec<T> = serde_json::from_slice(&contents)
            .map_err(|source| ShelfError::CorruptCollection { path, source })?;
        log::trace!("Loaded {} {} records", records.len(), T::KIND);
        Ok(records)
    }

    fn save<T: Record>(&self, name: &str, records: &[T]) -> Result<()> {
        let path = self.path_for(name);
        log::debug!("Saving {} {} records to {path:?}", records.len(), T::KIND);

        let contents = serde_json::to_vec_pretty(records).map_err(ShelfError::JsonSerialize)?;
        Self::write_atomic(&path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, Note, Year};
    use tempfile::TempDir;

    fn book(title: &str, year: i64, read_status: bool) -> Book {
        Book {
            title: title.to_string(),
            author: "Author".to_string(),
            year: Year::try_from(year).unwrap(),
            genre: "Fiqh".to_string(),
            read_status,
        }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        let books: Vec<Book> = store.load("books.json").unwrap();
        assert!(books.is_empty());
        assert!(!temp.path().join("books.json").exists());
    }

    #[test]
    fn test_round_trip_books() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        let books = vec![
            book("Al-Muwatta", 1000, true),
            book("Bidayat al-Mujtahid", 9999, false),
            book("Ihya", 1105, true),
        ];

        store.save("books.json", &books).unwrap();
        let loaded: Vec<Book> = store.load("books.json").unwrap();
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_round_trip_notes_with_unicode() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        let notes = vec![
            Note {
                subject: "Nahw".to_string(),
                content: "الكلام \"quoted\"\nsecond line".to_string(),
            },
            Note {
                subject: "Sarf".to_string(),
                content: "patterns".to_string(),
            },
        ];

        store.save("notes.json", &notes).unwrap();
        let loaded: Vec<Note> = store.load("notes.json").unwrap();
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        store
            .save("books.json", &[book("One", 2000, true), book("Two", 2001, true)])
            .unwrap();
        store.save("books.json", &[book("Three", 2002, false)]).unwrap();

        let loaded: Vec<Book> = store.load("books.json").unwrap();
        assert_eq!(loaded, vec![book("Three", 2002, false)]);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.save("books.json", &[book("One", 2000, true)]).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["books.json".to_string()]);
    }

    #[test]
    fn test_reads_flat_array_written_by_hand() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("books.json"),
            r#"[{"title": "A", "author": "B", "year": 1990, "genre": "C", "read_status": false}]"#,
        )
        .unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        let loaded: Vec<Book> = store.load("books.json").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].year.get(), 1990);
        assert!(!loaded[0].read_status);
    }

    #[test]
    fn test_corrupt_file_is_distinct_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.json"), "{not json").unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        match store.load::<Note>("notes.json").unwrap_err() {
            ShelfError::CorruptCollection { path, .. } => {
                assert_eq!(path, temp.path().join("notes.json"));
            }
            other => panic!("Expected CorruptCollection, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_file_is_corrupt() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("books.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        let err = store.load::<Book>("books.json").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        match err {
            ShelfError::CorruptCollection { path, .. } => {
                assert_eq!(path, temp.path().join("books.json"));
            }
            other => panic!("Expected CorruptCollection, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("books.json"),
            r#"[{"title": "A", "author": "B", "year": 12, "genre": "C", "read_status": true}]"#,
        )
        .unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        let err = store.load::<Book>("books.json").unwrap_err();
        assert!(matches!(err, ShelfError::CorruptCollection { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_creates_it() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("data"));
        store.save("notes.json", &Vec::<Note>::new()).unwrap();

        assert!(temp.path().join("data/notes.json").exists());
        let loaded: Vec<Note> = store.load("notes.json").unwrap();
        assert!(loaded.is_empty());
    }
}
