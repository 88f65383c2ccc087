//! The fixed catalog a fresh library starts with.

use crate::library::Library;

/// Titles, authors and ISBNs of the starter catalog, in id order.
const SEED_BOOKS: [(&str, &str, &str); 8] = [
    ("El Quijote", "Miguel de Cervantes", "978-84-376-0494-7"),
    ("Cien años de soledad", "Gabriel García Márquez", "978-84-376-0495-4"),
    ("1984", "George Orwell", "978-84-376-0496-1"),
    ("El Principito", "Antoine de Saint-Exupéry", "978-84-376-0497-8"),
    ("To Kill a Mockingbird", "Harper Lee", "978-84-376-0498-5"),
    ("The Great Gatsby", "F. Scott Fitzgerald", "978-84-376-0499-2"),
    ("Pride and Prejudice", "Jane Austen", "978-84-376-0500-5"),
    ("The Catcher in the Rye", "J.D. Salinger", "978-84-376-0501-2"),
];

impl Library {
    /// A library pre-loaded with the eight seed books, ids 1 through 8,
    /// all available.
    pub fn with_seed_books() -> Self {
        let mut library = Library::new();

        for (title, author, isbn) in SEED_BOOKS {
            library
                .add_book(title, author, isbn)
                .expect("seed rows are static and well formed");
        }

        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_library_has_eight_available_books() {
        let library = Library::with_seed_books();
        let stats = library.statistics();

        assert_eq!(stats.total_books, 8);
        assert_eq!(stats.available, 8);
        assert_eq!(stats.on_loan, 0);
        assert_eq!(stats.users, 0);
    }

    #[test]
    fn seed_ids_follow_creation_order() {
        let library = Library::with_seed_books();
        assert_eq!(
            library.book(1).map(|book| book.title.as_str()),
            Some("El Quijote")
        );
        assert_eq!(
            library.book(8).map(|book| book.title.as_str()),
            Some("The Catcher in the Rye")
        );
    }

    #[test]
    fn ninth_book_gets_id_nine() {
        let mut library = Library::with_seed_books();
        let book = library
            .add_book("Dune", "Frank Herbert", "978-0-441-17271-9")
            .expect("valid book");
        assert_eq!(book.id, 9);
    }
}
