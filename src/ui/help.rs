use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&["q: Quit", "?: Toggle help", "esc: Close help / Quit"]));

    lines.push(Line::from(""));
    lines.push(section_title("Deadline formats"));
    lines.extend(section_lines(&[
        "2024-12-31T23:59:59Z (ISO-8601, offset kept)",
        "2024-12-31T23:59:59 (no offset: local time)",
        "20241231235959 (YYYYMMDDHHmmss, local time)",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Options"));
    lines.extend(section_lines(&[
        "--title / --subtitle / --done: texts",
        "--confetti true: celebrate on completion",
        "--accent / --bg: colors (#RRGGBB or name)",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
