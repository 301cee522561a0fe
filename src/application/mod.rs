//! Application layer - Use cases and orchestration

pub mod books;
pub mod init;
pub mod manage_config;
pub mod notes;
pub mod statistics;

pub use books::BookService;
pub use manage_config::ConfigService;
pub use notes::NoteService;
pub use statistics::library_statistics;
