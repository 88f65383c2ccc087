//! The interactive menu loop.
//!
//! Holds one seeded [`Library`] for the whole session and dispatches each
//! selected option to the matching core operation. All validation of raw
//! input (blank names, non-numeric ids) happens here; the core only sees
//! well-typed calls.

use colored::*;
use console::Term;
use libris_common::{config::Config, fail, info, success, warn};
use libris_core::Library;

use crate::commands::demo;
use crate::terminal::{colors, format, input, print, render};

const OPTIONS: [(&str, &str); 10] = [
    ("1", "Search books by title"),
    ("2", "Loan a book"),
    ("3", "Return a book"),
    ("4", "Add a new book"),
    ("5", "Show all books"),
    ("6", "Show users and their loans"),
    ("7", "Show statistics"),
    ("8", "Help"),
    ("9", "Run the demo script"),
    ("10", "Quit"),
];

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut library = Library::with_seed_books();

    loop {
        show_options(&term, cfg)?;
        let choice = input::prompt(&term, "Select an option (1-10)")?;

        if choice.is_empty() {
            warn!("Please enter an option.");
            input::pause(&term)?;
            continue;
        }

        print::blank();

        match choice.as_str() {
            "1" => search(&term, &library)?,
            "2" => loan(&term, &mut library)?,
            "3" => return_book(&term, &mut library)?,
            "4" => add(&term, &mut library)?,
            "5" => render::catalog(&library),
            "6" => render::users(&library),
            "7" => render::stats(&library),
            "8" => show_help(),
            "9" => run_demo(&term, cfg)?,
            "10" | "q" => {
                success!("Thanks for using libris!");
                return Ok(());
            }
            _ => warn!("Unknown option. Pick a number from 1 to 10."),
        }

        input::pause(&term)?;
    }
}

fn show_options(term: &Term, cfg: &Config) -> anyhow::Result<()> {
    term.clear_screen()?;
    print::banner(cfg);
    print::header("book lending registry");
    print::blank();

    for (key, label) in OPTIONS {
        print::print(&format!(
            "  {} {}",
            format!("[{key:>2}]").color(colors::ACCENT),
            label.color(colors::TEXT_DEFAULT)
        ));
    }

    print::blank();
    Ok(())
}

fn search(term: &Term, library: &Library) -> anyhow::Result<()> {
    print::header("search by title");
    let query = input::prompt(term, "Title (or part of it)")?;

    if query.is_empty() {
        warn!("The title must not be empty.");
        return Ok(());
    }

    let matches = library.search_by_title(&query);
    if matches.is_empty() {
        warn!("No titles containing '{query}'. Try a broader search.");
        return Ok(());
    }

    success!("{} match(es) for '{query}':", matches.len());
    for book in matches {
        print::print(&format!("  {}", format::book_line(book)));
    }
    Ok(())
}

fn loan(term: &Term, library: &mut Library) -> anyhow::Result<()> {
    print::header("loan a book");

    let Some(id) = input::prompt_book_id(term, "Book id")? else {
        warn!("The book id must be a whole number.");
        return Ok(());
    };
    let user = input::prompt(term, "User name")?;
    if user.is_empty() {
        warn!("The user name must not be empty.");
        return Ok(());
    }

    match library.loan_book(id, &user) {
        Ok(receipt) => {
            if receipt.newly_registered {
                info!("New user registered: {}", receipt.borrower);
            }
            success!("'{}' loaned to {}.", receipt.title, receipt.borrower);
            info!(
                "Loans left for {}: {}",
                receipt.borrower, receipt.remaining_slots
            );
        }
        Err(err) => fail!("{err}"),
    }
    Ok(())
}

fn return_book(term: &Term, library: &mut Library) -> anyhow::Result<()> {
    print::header("return a book");

    let Some(id) = input::prompt_book_id(term, "Book id")? else {
        warn!("The book id must be a whole number.");
        return Ok(());
    };
    let user = input::prompt(term, "User name")?;
    if user.is_empty() {
        warn!("The user name must not be empty.");
        return Ok(());
    }

    match library.return_book(id, &user) {
        Ok(receipt) => {
            success!("'{}' returned by {}.", receipt.title, receipt.user);
            info!("Loans left for {}: {}", receipt.user, receipt.remaining_slots);
        }
        Err(err) => fail!("{err}"),
    }
    Ok(())
}

fn add(term: &Term, library: &mut Library) -> anyhow::Result<()> {
    print::header("add a new book");

    let title = input::prompt(term, "Title")?;
    if title.is_empty() {
        warn!("The title must not be empty.");
        return Ok(());
    }
    let author = input::prompt(term, "Author")?;
    if author.is_empty() {
        warn!("The author must not be empty.");
        return Ok(());
    }
    let isbn = input::prompt(term, "ISBN (optional)")?;

    match library.add_book(&title, &author, &isbn) {
        Ok(book) => success!("Added {}", format::book_line(book)),
        Err(err) => fail!("{err}"),
    }
    Ok(())
}

fn show_help() {
    print::header("help");

    print::section("Search");
    print::print("  Full or partial titles work, case does not matter.");
    print::print("  Searching 'quijote' will find 'El Quijote'.");
    print::blank();

    print::section("Loans");
    print::print("  Each user may hold at most 3 books at once.");
    print::print("  Users are registered automatically on their first loan.");
    print::print("  A book on loan cannot be loaned to anyone else.");
    print::blank();

    print::section("Returns");
    print::print("  Only the user who borrowed a book may return it.");
    print::print("  A returned book is immediately available again.");
    print::blank();

    print::section("Tips");
    print::print("  Option 5 lists every book together with its id.");
    print::print("  Option 6 shows what each user currently holds.");
}

fn run_demo(term: &Term, cfg: &Config) -> anyhow::Result<()> {
    info!("The demo script exercises search, the loan cap and returns");
    info!("against a fresh library. The menu's library is not touched.");
    let answer = input::prompt(term, "Run it? [y/N]")?;

    if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
        info!("Demo cancelled.");
        return Ok(());
    }

    print::blank();
    if let Err(err) = demo::run(cfg) {
        fail!("{err}");
    }
    Ok(())
}
