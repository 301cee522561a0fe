//! Domain layer - Records, validation and statistics

pub mod book;
pub mod note;
pub mod record;
pub mod stats;
pub mod validation;
pub mod year;

pub use book::{Book, BookDraft};
pub use note::{Note, NoteDraft};
pub use record::Record;
pub use stats::{LibraryStats, Proportion};
pub use validation::{Field, ValidationError};
pub use year::{Year, YearOutOfRange};
