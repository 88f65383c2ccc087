//! # Book Model
//!
//! A single catalog entry and its loan state.
//!
//! A book either sits on the shelf (`loan` is `None`) or is checked out
//! (`loan` carries the borrower and the loan timestamp). There is no third
//! state, so "borrower present iff on loan" holds by construction.

use std::fmt;

use chrono::{DateTime, Utc};

/// Loan state recorded on a book while it is checked out.
#[derive(Clone, Debug, PartialEq)]
pub struct Loan {
    /// Borrower name exactly as given at loan time.
    pub borrower: String,
    pub loaned_at: DateTime<Utc>,
}

/// A book in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    /// Unique identifier, assigned once and never reused.
    pub id: u32,
    pub title: String,
    pub author: String,
    /// ISBN-like identifier. May be empty.
    pub isbn: String,
    pub loan: Option<Loan>,
}

impl Book {
    pub fn new(id: u32, title: String, author: String, isbn: String) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
            loan: None,
        }
    }

    pub fn is_on_loan(&self) -> bool {
        self.loan.is_some()
    }

    /// Current borrower, if any.
    pub fn borrower(&self) -> Option<&str> {
        self.loan.as_ref().map(|loan| loan.borrower.as_str())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} by {} | ISBN: {} | ",
            self.id, self.title, self.author, self.isbn
        )?;
        match &self.loan {
            Some(loan) => write!(f, "on loan to {}", loan.borrower),
            None => write!(f, "available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quijote() -> Book {
        Book::new(
            1,
            "El Quijote".to_string(),
            "Miguel de Cervantes".to_string(),
            "978-84-376-0494-7".to_string(),
        )
    }

    #[test]
    fn new_book_is_available() {
        let book = quijote();
        assert!(!book.is_on_loan());
        assert_eq!(book.borrower(), None);
    }

    #[test]
    fn display_shows_loan_state() {
        let mut book = quijote();
        assert_eq!(
            book.to_string(),
            "ID: 1 | El Quijote by Miguel de Cervantes | ISBN: 978-84-376-0494-7 | available"
        );

        book.loan = Some(Loan {
            borrower: "Ana".to_string(),
            loaned_at: Utc::now(),
        });
        assert!(book.to_string().ends_with("on loan to Ana"));
        assert_eq!(book.borrower(), Some("Ana"));
    }
}
