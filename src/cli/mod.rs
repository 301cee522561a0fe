//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{BookAction, Cli, Commands, NoteAction};
pub use output::{format_book_list, format_note_list, format_stats};
