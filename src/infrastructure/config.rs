//! Configuration management

use crate::error::{Result, ShelfError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BOOKS_FILE: &str = "books.json";
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

fn default_books_file() -> String {
    DEFAULT_BOOKS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File holding the book collection, relative to the library root
    #[serde(default = "default_books_file")]
    pub books_file: String,

    /// File holding the note collection, relative to the library root
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// When the library was initialized; absent for an uninitialized directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            books_file: default_books_file(),
            notes_file: default_notes_file(),
            created: None,
        }
    }
}

impl Config {
    /// Create a new config with default file names, stamped with the current time
    pub fn new() -> Self {
        Config {
            created: Some(Utc::now()),
            ..Config::default()
        }
    }

    /// Load config from .shelf/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".shelf").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelfError::NotShelfDirectory(path.to_path_buf())
            } else {
                ShelfError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        Self::validate_file_name(&config.books_file)?;
        Self::validate_file_name(&config.notes_file)?;
        Ok(config)
    }

    /// Save config to .shelf/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let shelf_dir = path.join(".shelf");
        let config_path = shelf_dir.join("config.toml");

        if !shelf_dir.exists() {
            fs::create_dir(&shelf_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Collection files are plain `.json` names inside the library root.
    pub fn validate_file_name(name: &str) -> Result<()> {
        let plain = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\'])
            && name.len() > ".json".len()
            && name.ends_with(".json");
        if plain {
            Ok(())
        } else {
            Err(ShelfError::Config(format!(
                "Invalid collection file name: '{}'. Expected a plain file name ending in .json",
                name
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.books_file, "books.json");
        assert_eq!(config.notes_file, "notes.json");
        assert!(config.created.is_some());
    }

    #[test]
    fn test_default_has_no_created() {
        assert!(Config::default().created.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            books_file: "library.json".to_string(),
            ..Config::new()
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".shelf/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.books_file, "library.json");
        assert_eq!(loaded.notes_file, "notes.json");
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            ShelfError::NotShelfDirectory(_) => {}
            other => panic!("Expected NotShelfDirectory error, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".shelf")).unwrap();
        fs::write(
            temp.path().join(".shelf/config.toml"),
            "notes_file = \"dars.json\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.books_file, "books.json");
        assert_eq!(loaded.notes_file, "dars.json");
        assert!(loaded.created.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".shelf")).unwrap();
        fs::write(temp.path().join(".shelf/config.toml"), "books_file = [").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(ShelfError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_load_rejects_path_like_file_name() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".shelf")).unwrap();
        fs::write(
            temp.path().join(".shelf/config.toml"),
            "books_file = \"../books.json\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_validate_file_name() {
        assert!(Config::validate_file_name("books.json").is_ok());
        assert!(Config::validate_file_name("my-books.json").is_ok());
        assert!(Config::validate_file_name("").is_err());
        assert!(Config::validate_file_name(".json").is_err());
        assert!(Config::validate_file_name("books.txt").is_err());
        assert!(Config::validate_file_name("dir/books.json").is_err());
        assert!(Config::validate_file_name(".hidden.json").is_err());
    }
}
