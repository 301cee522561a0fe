use clap::Parser;
use shelf::application::{init::init, library_statistics, BookService, ConfigService, NoteService};
use shelf::cli::{output, BookAction, Cli, Commands, NoteAction};
use shelf::domain::{BookDraft, NoteDraft};
use shelf::error::ShelfError;
use shelf::infrastructure::{FileSystemRepository, LibraryRepository};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), ShelfError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config = init(&path)?;
            println!("Initialized shelf library at {}", path.display());
            println!("Books file: {}", config.books_file);
            println!("Notes file: {}", config.notes_file);
            Ok(())
        }
        Some(Commands::Book { action }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = BookService::new(repo.store(), config.books_file);

            match action {
                BookAction::Add {
                    title,
                    author,
                    year,
                    genre,
                    unread,
                } => {
                    let book = service.add(BookDraft {
                        title,
                        author,
                        year,
                        genre,
                        read_status: !unread,
                    })?;
                    println!("{}", output::book_added(&book));
                }
                BookAction::List => {
                    println!("{}", output::format_book_list(&service.list()?).trim_end());
                }
            }
            Ok(())
        }
        Some(Commands::Note { action }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = NoteService::new(repo.store(), config.notes_file);

            match action {
                NoteAction::Add { subject, content } => {
                    let note = service.add(NoteDraft { subject, content })?;
                    println!("{}", output::note_added(&note));
                }
                NoteAction::List => {
                    println!("{}", output::format_note_list(&service.list()?).trim_end());
                }
            }
            Ok(())
        }
        Some(Commands::Stats) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let stats = library_statistics(repo.store(), &config.books_file)?;
            print!("{}", output::format_stats(&stats));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("books_file = {}", config.books_file);
                println!("notes_file = {}", config.notes_file);
                if let Some(created) = config.created {
                    println!("created = {}", created.to_rfc3339());
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: shelf config [--list | <key> [<value>]]");
                println!("Valid keys: books_file, notes_file");
                Ok(())
            }
        }
        None => {
            println!("{}", output::welcome());
            Ok(())
        }
    }
}
