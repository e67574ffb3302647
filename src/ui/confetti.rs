use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
};

use crate::color::hex_to_color;
use crate::confetti::ConfettiField;

/// Paint live particles over whatever has already been drawn.
pub fn render(frame: &mut Frame, field: &ConfettiField) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for particle in field.particles() {
        let Some((x, y)) = particle.unit_position() else {
            continue;
        };
        let col = area.x + (x * f64::from(area.width)) as u16;
        let row = area.y + (y * f64::from(area.height)) as u16;
        let mut style = Style::default().fg(hex_to_color(particle.color).unwrap_or(Color::White));
        if particle.scalar > 1.0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(particle.glyph).set_style(style);
        }
    }
}
