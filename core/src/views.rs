//! Read-only projections of the registry state.

use libris_common::book::Book;

/// Catalog partitioned by availability, both halves title-sorted.
#[derive(Debug)]
pub struct CatalogView<'a> {
    pub available: Vec<&'a Book>,
    pub on_loan: Vec<&'a Book>,
    pub total: usize,
}

/// One user with their held books resolved to titles.
#[derive(Debug)]
pub struct UserView<'a> {
    pub name: &'a str,
    /// (book id, title) pairs in loan order. Ids with no matching book
    /// are skipped here rather than reported.
    pub held: Vec<(u32, &'a str)>,
    pub cap: usize,
}

/// Aggregate counters for the statistics screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub total_books: usize,
    pub available: usize,
    pub on_loan: usize,
    pub users: usize,
    /// Share of the catalog currently out, in percent. Zero on an empty
    /// catalog.
    pub occupancy_pct: f64,
}
