//! # Lending Registry
//!
//! Owns the book catalog and the user registry and enforces the lending
//! rules: one borrower per book, at most [`User::LOAN_CAP`] books per
//! user, and returns only by the recorded borrower.
//!
//! User identity is case-insensitive. The map key is the lower-cased
//! trimmed name while [`User::name`] keeps the casing the user first
//! typed, so lookup and display can never diverge.

use std::collections::BTreeMap;

use chrono::Utc;
use libris_common::book::{Book, Loan};
use libris_common::error::LibraryError;
use libris_common::user::User;

use crate::views::{CatalogView, Stats, UserView};

/// Outcome of a successful loan, carrying the facts the caller needs to
/// report it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoanReceipt {
    pub title: String,
    /// Borrower name as recorded on the book.
    pub borrower: String,
    /// Loans the user has left after this one.
    pub remaining_slots: usize,
    /// True when this loan registered the user for the first time.
    pub newly_registered: bool,
}

/// Outcome of a successful return.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnReceipt {
    pub title: String,
    pub user: String,
    pub remaining_slots: usize,
}

/// The registry itself. Sole owner of all catalog and user state.
#[derive(Debug)]
pub struct Library {
    /// Catalog keyed by id. Ids are monotonic, so iteration order is
    /// insertion order.
    books: BTreeMap<u32, Book>,
    /// Users keyed by lower-cased trimmed name.
    users: BTreeMap<String, User>,
    next_id: u32,
}

impl Library {
    /// An empty registry. Ids start at 1.
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Adds a book to the catalog and returns it.
    ///
    /// Title and author must be non-empty after trimming; the ISBN may be
    /// empty. The id counter only advances on success, so a rejected add
    /// never burns an id.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<&Book, LibraryError> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() {
            return Err(LibraryError::EmptyField { field: "title" });
        }
        if author.is_empty() {
            return Err(LibraryError::EmptyField { field: "author" });
        }

        let id = self.next_id;
        self.next_id += 1;

        let book = Book::new(
            id,
            title.to_string(),
            author.to_string(),
            isbn.trim().to_string(),
        );

        Ok(self.books.entry(id).or_insert(book))
    }

    /// Case-insensitive substring search over titles.
    ///
    /// An empty or whitespace query matches nothing rather than
    /// everything. Results come back title-sorted, with the id as a
    /// stable tiebreak.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&Book> = self
            .books
            .values()
            .filter(|book| book.title.to_lowercase().contains(&query))
            .collect();

        matches.sort_by_key(|book| (book.title.to_lowercase(), book.id));
        matches
    }

    /// Loans a book, registering the user on first contact.
    ///
    /// Precondition order is observable: existence, availability, user
    /// registration, then the cap. A user created here stays registered
    /// even when the cap check rejects the loan.
    pub fn loan_book(&mut self, id: u32, user_name: &str) -> Result<LoanReceipt, LibraryError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(LibraryError::EmptyField { field: "user name" });
        }

        let Some(book) = self.books.get(&id) else {
            return Err(LibraryError::BookNotFound { id });
        };
        if let Some(loan) = &book.loan {
            return Err(LibraryError::AlreadyOnLoan {
                title: book.title.clone(),
                borrower: loan.borrower.clone(),
            });
        }

        let key = user_name.to_lowercase();
        let newly_registered = !self.users.contains_key(&key);
        let user = self
            .users
            .entry(key)
            .or_insert_with(|| User::new(user_name.to_string()));

        if !user.can_borrow() {
            return Err(LibraryError::LoanCapReached {
                user: user.name.clone(),
                held: user.held.len(),
                cap: User::LOAN_CAP,
            });
        }

        user.held.push(id);
        let remaining_slots = user.remaining_slots();

        // Checked above; no removal API exists that could invalidate it.
        let Some(book) = self.books.get_mut(&id) else {
            return Err(LibraryError::BookNotFound { id });
        };
        book.loan = Some(Loan {
            borrower: user_name.to_string(),
            loaned_at: Utc::now(),
        });

        Ok(LoanReceipt {
            title: book.title.clone(),
            borrower: user_name.to_string(),
            remaining_slots,
            newly_registered,
        })
    }

    /// Returns a book on behalf of `user_name`.
    ///
    /// Only the recorded borrower (compared case-insensitively) may
    /// return a book. The held-list removal is best effort: a missing
    /// user record does not block the return itself.
    pub fn return_book(&mut self, id: u32, user_name: &str) -> Result<ReturnReceipt, LibraryError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(LibraryError::EmptyField { field: "user name" });
        }

        let Some(book) = self.books.get_mut(&id) else {
            return Err(LibraryError::BookNotFound { id });
        };
        let Some(loan) = &book.loan else {
            return Err(LibraryError::NotOnLoan {
                title: book.title.clone(),
            });
        };
        if loan.borrower.to_lowercase() != user_name.to_lowercase() {
            return Err(LibraryError::NotTheBorrower {
                title: book.title.clone(),
                borrower: loan.borrower.clone(),
                user: user_name.to_string(),
            });
        }

        book.loan = None;
        let title = book.title.clone();

        let mut remaining_slots = User::LOAN_CAP;
        if let Some(user) = self.users.get_mut(&user_name.to_lowercase()) {
            user.held.retain(|held_id| *held_id != id);
            remaining_slots = user.remaining_slots();
        }

        Ok(ReturnReceipt {
            title,
            user: user_name.to_string(),
            remaining_slots,
        })
    }

    /// Single book lookup.
    pub fn book(&self, id: u32) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Case-insensitive user lookup.
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(&name.trim().to_lowercase())
    }

    /// Catalog partitioned into available and on-loan books, both halves
    /// title-sorted.
    pub fn catalog(&self) -> CatalogView<'_> {
        let mut available: Vec<&Book> = Vec::new();
        let mut on_loan: Vec<&Book> = Vec::new();

        for book in self.books.values() {
            if book.is_on_loan() {
                on_loan.push(book);
            } else {
                available.push(book);
            }
        }

        available.sort_by_key(|book| (book.title.to_lowercase(), book.id));
        on_loan.sort_by_key(|book| (book.title.to_lowercase(), book.id));

        CatalogView {
            available,
            on_loan,
            total: self.books.len(),
        }
    }

    /// All users sorted by name, held ids resolved to titles.
    pub fn users(&self) -> Vec<UserView<'_>> {
        self.users
            .values()
            .map(|user| UserView {
                name: &user.name,
                held: user
                    .held
                    .iter()
                    .filter_map(|id| self.books.get(id).map(|book| (*id, book.title.as_str())))
                    .collect(),
                cap: User::LOAN_CAP,
            })
            .collect()
    }

    pub fn statistics(&self) -> Stats {
        let total_books = self.books.len();
        let on_loan = self.books.values().filter(|book| book.is_on_loan()).count();

        let occupancy_pct = if total_books == 0 {
            0.0
        } else {
            on_loan as f64 / total_books as f64 * 100.0
        };

        Stats {
            total_books,
            available: total_books - on_loan,
            on_loan,
            users: self.users.len(),
            occupancy_pct,
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
