//! shelf - Personal library and study notes manager
//!
//! Records books (with read/unread status) and free-text study notes in two
//! JSON files, and reports read/unread statistics over the library.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ShelfError;
