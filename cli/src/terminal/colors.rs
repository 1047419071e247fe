use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const KIND: Color = Color::Cyan;
pub const TAX_ID: Color = Color::BrightWhite;
pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;
