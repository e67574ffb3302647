/// Color utilities for theme overrides and confetti.
use std::str::FromStr;

use ratatui::style::Color;

/// Confetti colors.
pub const PALETTE: &[&str] = &[
    "#FF5733", "#33FF57", "#3357FF", "#F333FF", "#33FFF5", "#F5FF33", "#FF33A8", "#A833FF",
    "#33FFA8", "#FFA833", "#FF3380", "#8033FF", "#33FF80", "#FF8033",
];

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse a user supplied color: `#RRGGBB` or a named terminal color
/// such as `red` or `lightblue`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if is_valid_hex(value) {
        return hex_to_color(value);
    }
    Color::from_str(value).ok()
}
