//! Infrastructure layer - External I/O and persistence

pub mod collection;
pub mod config;
pub mod repository;
pub mod store;

pub use collection::Collection;
pub use config::Config;
pub use repository::{FileSystemRepository, LibraryRepository};
pub use store::{CollectionStore, JsonFileStore};
