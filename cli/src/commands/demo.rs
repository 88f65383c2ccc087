//! Scripted demonstration of the lending rules.
//!
//! Runs a fixed sequence of operations against a fresh seeded library and
//! prints a ✓/✗ line per check. The sequence is deterministic, so the
//! expected outcomes are hard-coded.

use anyhow::bail;
use libris_common::error::LibraryError;
use libris_common::{config::Config, fail, success};
use libris_core::Library;

use crate::terminal::print;

struct Checks {
    passed: usize,
    failed: usize,
}

impl Checks {
    fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    fn record(&mut self, label: &str, ok: bool) {
        if ok {
            self.passed += 1;
            success!("{label}");
        } else {
            self.failed += 1;
            fail!("{label}");
        }
    }
}

pub fn run(_cfg: &Config) -> anyhow::Result<()> {
    print::header("demo script");

    let mut library = Library::with_seed_books();
    let mut checks = Checks::new();

    search_checks(&library, &mut checks);
    loan_cap_checks(&mut library, &mut checks);
    return_checks(&mut library, &mut checks);
    validation_checks(&mut library, &mut checks);

    print::blank();
    print::fat_separator();
    print::centerln(&format!(
        "{} checks passed, {} failed",
        checks.passed, checks.failed
    ));

    if checks.failed > 0 {
        bail!("{} demo checks failed", checks.failed);
    }
    Ok(())
}

fn search_checks(library: &Library, checks: &mut Checks) {
    print::blank();
    print::section("Search");

    let quijote = library.search_by_title("quijote");
    checks.record(
        "'quijote' finds exactly El Quijote",
        quijote.len() == 1 && quijote[0].title == "El Quijote",
    );
    checks.record(
        "'1984' finds exactly one title",
        library.search_by_title("1984").len() == 1,
    );
    checks.record(
        "an unknown title finds nothing",
        library.search_by_title("no such book").is_empty(),
    );
}

fn loan_cap_checks(library: &mut Library, checks: &mut Checks) {
    print::blank();
    print::section("Loan cap");

    for id in 1..=3 {
        checks.record(
            &format!("loan of book {id} to TestUser succeeds"),
            library.loan_book(id, "TestUser").is_ok(),
        );
    }

    checks.record(
        "the fourth loan is blocked by the cap",
        matches!(
            library.loan_book(4, "TestUser"),
            Err(LibraryError::LoanCapReached { held: 3, cap: 3, .. })
        ),
    );
    checks.record(
        "TestUser still holds exactly 3 books",
        library.user("TestUser").is_some_and(|user| user.held.len() == 3),
    );
}

fn return_checks(library: &mut Library, checks: &mut Checks) {
    print::blank();
    print::section("Returns");

    checks.record(
        "TestUser returns book 1",
        library.return_book(1, "TestUser").is_ok(),
    );
    checks.record(
        "the freed slot allows a new loan",
        library.loan_book(4, "TestUser").is_ok(),
    );
}

fn validation_checks(library: &mut Library, checks: &mut Checks) {
    print::blank();
    print::section("Validation");

    checks.record(
        "loaning an already-loaned book is blocked",
        matches!(
            library.loan_book(2, "OtherUser"),
            Err(LibraryError::AlreadyOnLoan { .. })
        ),
    );
    checks.record(
        "returning a book that is not on loan is blocked",
        matches!(
            library.return_book(5, "TestUser"),
            Err(LibraryError::NotOnLoan { .. })
        ),
    );
    checks.record(
        "an empty search returns nothing",
        library.search_by_title("").is_empty(),
    );
}
