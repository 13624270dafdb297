use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const KILOCALORIES: Color = Color::BrightYellow;
pub const CARBOHYDRATES: Color = Color::BrightCyan;
pub const PROTEINS: Color = Color::BrightMagenta;
pub const FATS: Color = Color::BrightBlue;
