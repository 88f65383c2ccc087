//! Screen-level rendering shared by the menu and the one-shot commands.

use libris_common::info;
use libris_core::Library;

use crate::terminal::{format, print};

/// The full catalog, partitioned into available and on-loan books.
pub fn catalog(library: &Library) {
    let view = library.catalog();

    print::header("full catalog");

    if view.total == 0 {
        info!("No books in the catalog.");
        return;
    }

    print::section(&format!("Available ({})", view.available.len()));
    for book in &view.available {
        print::print(&format!("  {}", format::book_line(book)));
    }

    print::blank();
    print::section(&format!("On loan ({})", view.on_loan.len()));
    for book in &view.on_loan {
        print::print(&format!("  {}", format::book_line(book)));
    }

    print::blank();
    print::print_status(format!("Total books: {}", view.total));
}

/// Every registered user with their held books.
pub fn users(library: &Library) {
    print::header("registered users");

    let users = library.users();
    if users.is_empty() {
        info!("No users registered yet.");
        return;
    }

    for (idx, user) in users.iter().enumerate() {
        print::tree_head(
            idx,
            &format!("{} ({}/{} on loan)", user.name, user.held.len(), user.cap),
        );
        print::as_tree_one_level(format::user_details(user));
        if idx + 1 != users.len() {
            print::blank();
        }
    }
}

/// The aggregate counters.
pub fn stats(library: &Library) {
    print::header("system statistics");

    let stats = library.statistics();
    let details = format::stats_details(&stats);

    let key_width = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    print::set_key_width(key_width);

    for (key, value) in details {
        print::aligned_line(&key, value);
    }
}
