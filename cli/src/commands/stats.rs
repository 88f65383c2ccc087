use libris_common::config::Config;
use libris_core::Library;

use crate::terminal::render;

pub fn run(_cfg: &Config) {
    let library = Library::with_seed_books();
    render::stats(&library);
}
