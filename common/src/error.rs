//! Typed failures for every library operation.
//!
//! Each variant carries the facts its user-facing message needs, so the
//! presentation layer never has to query the registry again to explain a
//! rejection.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LibraryError {
    /// A required text input was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no book with id {id}")]
    BookNotFound { id: u32 },

    /// Loan requested for a book somebody else already holds.
    #[error("'{title}' is already on loan to {borrower}")]
    AlreadyOnLoan { title: String, borrower: String },

    /// The user already holds the maximum number of books.
    #[error("{user} has reached the loan cap ({held}/{cap})")]
    LoanCapReached {
        user: String,
        held: usize,
        cap: usize,
    },

    /// Return requested for a book that sits on the shelf.
    #[error("'{title}' is not on loan")]
    NotOnLoan { title: String },

    /// Return attempted by someone other than the recorded borrower.
    #[error("'{title}' is on loan to {borrower}, not {user}")]
    NotTheBorrower {
        title: String,
        borrower: String,
        user: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_facts() {
        let err = LibraryError::LoanCapReached {
            user: "TestUser".to_string(),
            held: 3,
            cap: 3,
        };
        assert_eq!(err.to_string(), "TestUser has reached the loan cap (3/3)");

        let err = LibraryError::AlreadyOnLoan {
            title: "1984".to_string(),
            borrower: "Ana".to_string(),
        };
        assert_eq!(err.to_string(), "'1984' is already on loan to Ana");

        let err = LibraryError::EmptyField { field: "title" };
        assert_eq!(err.to_string(), "title must not be empty");
    }
}
