//! End-to-end tests driving libris-core the way the CLI does.

mod lending;
