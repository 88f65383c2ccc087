use anyhow::Context;
use colored::*;
use console::Term;

use crate::terminal::colors;

/// Prompts on `term` and reads one trimmed line.
pub fn prompt(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(&format!(
        "{} {}: ",
        ">".color(colors::SEPARATOR),
        label.color(colors::PRIMARY)
    ))
    .context("writing prompt")?;

    let line = term.read_line().context("reading input")?;
    Ok(line.trim().to_string())
}

/// Prompts for a book id. `None` means the input was not a whole number;
/// the caller decides how to complain.
pub fn prompt_book_id(term: &Term, label: &str) -> anyhow::Result<Option<u32>> {
    let raw = prompt(term, label)?;
    Ok(raw.parse::<u32>().ok())
}

/// The "press any key" pause between menu rounds.
pub fn pause(term: &Term) -> anyhow::Result<()> {
    term.write_line(&format!(
        "\n{}",
        "Press any key to continue...".color(colors::SEPARATOR).italic()
    ))
    .context("writing pause prompt")?;

    term.read_key().context("waiting for a key")?;
    Ok(())
}
