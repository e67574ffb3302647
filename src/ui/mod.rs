mod confetti;
mod digits;
mod help;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ticker::{Phase, Surface};
use help::build_help_text;

pub use theme::Theme;

const UNIT_LABELS: [&str; 4] = [" Days ", " Hours ", " Minutes ", " Seconds "];

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if let Some(bg) = app.theme.background() {
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Text::from(header_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);
    frame.render_widget(Paragraph::new(deadline_line(app)), layout[1]);

    let board = &app.board;
    if board.grid.as_ref().is_some_and(|grid| !grid.hidden) {
        render_grid(frame, app, layout[2]);
    } else if let Some(done) = board.done.as_ref().filter(|done| !done.hidden) {
        render_done(frame, app, done, layout[2]);
    }

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[3]);

    if let Some(field) = app.confetti() {
        confetti::render(frame, field);
    }

    if app.show_help {
        render_help(frame, app);
    }
}

fn header_line(app: &App) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("  {}  ", app.config.title),
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.config.subtitle.as_str(),
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn deadline_line(app: &App) -> Line<'_> {
    if app.deadline.is_valid() {
        Line::from(Span::styled(
            format!("  Until {}", app.deadline_text),
            Style::default().fg(Theme::dim()),
        ))
    } else {
        Line::from(Span::styled(
            format!("  Cannot read deadline '{}'", app.deadline_text),
            Style::default().fg(Theme::warn()),
        ))
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let (status, color) = match app.phase() {
        Phase::Running => ("● running", Theme::active()),
        Phase::Completed => ("✔ completed", Theme::success()),
    };
    Line::from(vec![
        Span::styled(format!(" {status} "), Style::default().fg(color)),
        Span::styled("  q: Quit  ?: Help", Style::default().fg(Theme::dim())),
    ])
}

/// Four unit boxes side by side. Units without a surface are left blank.
fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let board = &app.board;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let surfaces = [&board.days, &board.hours, &board.minutes, &board.seconds];
    let digit_color = if app.deadline.is_valid() {
        app.theme.accent()
    } else {
        Theme::warn()
    };

    for ((surface, label), cell) in surfaces.into_iter().zip(UNIT_LABELS).zip(cells.iter()) {
        let Some(surface) = surface else {
            continue;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(label)
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Theme::secondary()));
        let inner = block.inner(*cell);
        let style = Style::default()
            .fg(digit_color)
            .add_modifier(Modifier::BOLD);
        let text = if inner.height >= digits::HEIGHT && inner.width >= digits::width(&surface.text) {
            let mut lines = padding(inner.height, digits::HEIGHT);
            lines.extend(
                digits::render(&surface.text)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, style))),
            );
            Text::from(lines)
        } else {
            let mut lines = padding(inner.height, 1);
            lines.push(Line::from(Span::styled(surface.text.clone(), style)));
            Text::from(lines)
        };
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block),
            *cell,
        );
    }
}

fn render_done(frame: &mut Frame, app: &App, done: &Surface, area: Rect) {
    let mut lines = padding(area.height, 1);
    lines.push(Line::from(Span::styled(
        done.text.as_str(),
        Style::default()
            .fg(app.theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_help(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(build_help_text(&app.theme))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}

/// Blank lines that vertically center `content` rows inside `available`.
fn padding<'a>(available: u16, content: u16) -> Vec<Line<'a>> {
    let top = available.saturating_sub(content) / 2;
    (0..top).map(|_| Line::from("")).collect()
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
