/// A 3x5 block font for the countdown numbers.
pub const HEIGHT: u16 = 5;

fn glyph(c: char) -> [&'static str; HEIGHT as usize] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        '-' => ["   ", "   ", "███", "   ", "   "],
        _ => ["   "; HEIGHT as usize],
    }
}

/// Columns needed to draw `text` in the block font.
pub fn width(text: &str) -> u16 {
    let chars = text.chars().count() as u16;
    (chars * 4).saturating_sub(1)
}

/// The rows of `text` in the block font, glyphs separated by one column.
pub fn render(text: &str) -> Vec<String> {
    (0..HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
