//! Initialize library use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LibraryRepository};
use std::fs;
use std::path::Path;

/// Initialize a new library at the specified path.
///
/// Existing collection files in the directory are left as they are and
/// picked up by the default config.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;
    log::info!("Initialized library at {path:?}");

    Ok(config)
}
