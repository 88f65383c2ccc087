use colored::*;
use libris_common::book::Book;
use libris_core::{Stats, UserView};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// One catalog line: `[id] Title by Author | ISBN | status`.
pub fn book_line(book: &Book) -> String {
    let id: String = format!("[{:>2}]", book.id.to_string().color(colors::ACCENT));
    let title: ColoredString = book.title.color(colors::TITLE).bold();
    let author: ColoredString = book.author.color(colors::AUTHOR);

    let isbn: String = if book.isbn.is_empty() {
        String::new()
    } else {
        format!(" {} ISBN: {}", "|".color(colors::SEPARATOR), book.isbn)
    };

    let status: ColoredString = match book.borrower() {
        Some(borrower) => format!(
            "on loan to {}",
            borrower.color(colors::BORROWER)
        )
        .color(colors::ON_LOAN),
        None => "available".color(colors::AVAILABLE),
    };

    format!(
        "{} {} by {}{} {} {}",
        id.color(colors::SEPARATOR),
        title,
        author,
        isbn,
        "|".color(colors::SEPARATOR),
        status
    )
}

/// A user's held books as one-level tree details.
pub fn user_details(view: &UserView) -> Vec<Detail> {
    view.held
        .iter()
        .map(|(id, title)| (format!("ID {id}"), title.color(colors::TITLE)))
        .collect()
}

pub fn stats_details(stats: &Stats) -> Vec<Detail> {
    vec![
        (
            "Total books".to_string(),
            stats.total_books.to_string().normal(),
        ),
        (
            "Available".to_string(),
            stats.available.to_string().color(colors::AVAILABLE),
        ),
        (
            "On loan".to_string(),
            stats.on_loan.to_string().color(colors::ON_LOAN),
        ),
        (
            "Registered users".to_string(),
            stats.users.to_string().normal(),
        ),
        (
            "Occupancy".to_string(),
            format!("{:.1}%", stats.occupancy_pct).color(colors::ACCENT),
        ),
    ]
}
