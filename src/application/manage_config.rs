//! Config management use case

use crate::error::{Result, ShelfError};
use crate::infrastructure::{Config, FileSystemRepository, LibraryRepository};

const KEYS: &str = "books_file, notes_file";

/// Service for managing library configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "books_file" => Ok(config.books_file),
            "notes_file" => Ok(config.notes_file),
            _ => Err(ShelfError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Set a config value. Requires an initialized library.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.repository.is_initialized() {
            return Err(ShelfError::NotShelfDirectory(
                self.repository.root().to_path_buf(),
            ));
        }
        let mut config = self.repository.load_config()?;

        match key {
            "books_file" | "notes_file" => {
                Config::validate_file_name(value)?;
                if key == "books_file" {
                    config.books_file = value.to_string();
                } else {
                    config.notes_file = value.to_string();
                }
            }
            "created" => {
                return Err(ShelfError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        }

        if config.books_file == config.notes_file {
            return Err(ShelfError::Config(format!(
                "books_file and notes_file must differ (both '{}')",
                value
            )));
        }

        self.repository.save_config(&config)?;
        log::info!("Set {key} = {value}");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
