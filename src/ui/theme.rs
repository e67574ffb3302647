use ratatui::style::Color;

use crate::color::parse_color;
use crate::config::Config;

/// Color theme for the countdown. Fixed roles are associated functions;
/// accent and background can be overridden from the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    accent: Color,
    background: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::LightBlue,
            background: None,
        }
    }
}

impl Theme {
    /// Apply the accent and background overrides. Unreadable colors are
    /// logged and ignored.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            accent: config
                .accent
                .as_deref()
                .and_then(|value| override_color("accent", value))
                .unwrap_or(defaults.accent),
            background: config
                .bg
                .as_deref()
                .and_then(|value| override_color("background", value)),
        }
    }

    /// Accent for the title, digits and done message
    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Completed status
    pub fn success() -> Color {
        Color::Green
    }

    /// Running status
    pub fn active() -> Color {
        Color::LightGreen
    }

    /// Placeholder digits for an unreadable deadline
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }
}

fn override_color(name: &str, value: &str) -> Option<Color> {
    let color = parse_color(value);
    if color.is_none() {
        log::warn!("ignoring unreadable {name} color '{value}'");
    }
    color
}
