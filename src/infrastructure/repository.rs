//! File system repository

use crate::error::{Result, ShelfError};
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for library-level operations
pub trait LibraryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration, falling back to defaults when uninitialized
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .shelf/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .shelf/config.toml exists
    fn is_initialized(&self) -> bool;

    /// Create .shelf directory structure; a `.shelf` left without a config
    /// by an interrupted init is reused
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LibraryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the library root.
    ///
    /// SHELF_ROOT wins when set. Otherwise the nearest ancestor holding a
    /// `.shelf` directory is used, and failing that the current directory.
    pub fn discover() -> Result<Self> {
        if let Some(root_path) = std::env::var_os("SHELF_ROOT") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                log::debug!("Using SHELF_ROOT {path:?}");
                return Ok(FileSystemRepository::new(path));
            }
            return Err(ShelfError::NotShelfDirectory(path));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Walk up from `start` looking for a `.shelf` directory.
    pub fn discover_from(start: &Path) -> Self {
        let mut current = Some(start);
        while let Some(dir) = current {
            if Self::has_shelf_dir(dir) {
                log::debug!("Found library at {dir:?}");
                return FileSystemRepository::new(dir.to_path_buf());
            }
            current = dir.parent();
        }

        log::debug!("No .shelf directory above {start:?}, using it directly");
        FileSystemRepository::new(start.to_path_buf())
    }

    fn has_shelf_dir(path: &Path) -> bool {
        path.join(".shelf").is_dir()
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(".shelf").join("config.toml")
    }

    /// Store for the collection files of this library
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.root.clone())
    }
}

impl LibraryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        if !self.is_initialized() {
            return Ok(Config::default());
        }
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        self.config_path().is_file()
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(ShelfError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(".shelf"))?;
        Ok(())
    }
}
