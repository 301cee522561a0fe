//! CLI command definitions

use crate::domain::Year;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Personal library and study notes manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new library
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add or view books
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Add or view study notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show read/unread statistics
    Stats,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookAction {
    /// Add a book
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        /// Publication year (1000-9999)
        #[arg(long, default_value_t = Year::default())]
        year: Year,

        #[arg(long, default_value = "")]
        genre: String,

        /// Mark the book as not yet read
        #[arg(long)]
        unread: bool,
    },

    /// List all books
    List,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a note
    Add {
        /// Subject or lesson title
        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        content: String,
    },

    /// List all notes
    List,
}
