//! Error types for shelf

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shelf application
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Not a shelf directory: {0}")]
    NotShelfDirectory(PathBuf),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Corrupt collection file {}: {source}", .path.display())]
    CorruptCollection {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ShelfError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelfError::NotShelfDirectory(_) => 2,
            ShelfError::Validation(_) => 3,
            ShelfError::CorruptCollection { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShelfError::NotShelfDirectory(path) => {
                format!(
                    "Not a shelf directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'shelf init' in this directory to create a new library\n\
                    • Unset SHELF_ROOT to use the current directory",
                    path.display()
                )
            }
            ShelfError::Validation(err) => {
                format!(
                    "{}\n\n\
                    Please fill all fields and try again.",
                    err
                )
            }
            ShelfError::CorruptCollection { path, .. } => {
                format!(
                    "{}\n\n\
                    The file exists but is not a valid collection.\n\
                    Suggestions:\n\
                    • Fix or restore {} by hand (nothing was changed)\n\
                    • Move it aside to start a fresh collection",
                    self,
                    path.display()
                )
            }
            ShelfError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: shelf config books_file library.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;
