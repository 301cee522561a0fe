//! Output formatting utilities

use crate::domain::{Book, LibraryStats, Note};

const BAR_WIDTH: usize = 30;

/// Home screen text
pub fn welcome() -> String {
    [
        "Library & Notes Manager",
        "",
        "Welcome to your personal library and study notes manager!",
        "",
        "  shelf book add --title T --author A --year Y --genre G [--unread]",
        "  shelf book list",
        "  shelf note add --subject S --content C",
        "  shelf note list",
        "  shelf stats",
        "",
        "Use --help for more information",
    ]
    .join("\n")
}

/// Format the library listing, one line per book
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books added yet.".to_string();
    }

    let mut output = String::new();
    for book in books {
        output.push_str(&format!(
            "- Title: {}, Author: {}, Year: {}, Genre: {}, Status: {}\n",
            book.title,
            book.author,
            book.year,
            book.genre,
            if book.read_status { "Read" } else { "Unread" }
        ));
    }
    output
}

/// Format notes as headed sections separated by rules
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes added yet.".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!("### {}\n{}\n---\n", note.subject, note.content));
    }
    output
}

/// Counts, followed by a proportion chart when there is anything to chart
pub fn format_stats(stats: &LibraryStats) -> String {
    let mut output = format!(
        "Total Books: {}\nRead Books: {}\nUnread Books: {}\n",
        stats.total, stats.read, stats.unread
    );

    if let Some(p) = stats.proportion() {
        output.push('\n');
        output.push_str(&chart_row("Read", p.read));
        output.push_str(&chart_row("Unread", p.unread));
    }
    output
}

fn chart_row(label: &str, percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{:<7} {}{} {:>5.1}%\n",
        label,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Confirmation shown after a book is saved
pub fn book_added(book: &Book) -> String {
    format!(
        "Book '{}' added successfully!\n*** Another one for the shelf! ***",
        book.title
    )
}

/// Confirmation shown after a note is saved
pub fn note_added(note: &Note) -> String {
    format!("Note '{}' added successfully!", note.subject)
}
