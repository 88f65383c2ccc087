use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const TITLE: Color = Color::BrightCyan;
pub const AUTHOR: Color = Color::Cyan;
pub const AVAILABLE: Color = Color::Green;
pub const ON_LOAN: Color = Color::Yellow;
pub const BORROWER: Color = Color::BrightMagenta;
