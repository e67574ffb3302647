/// Start-up configuration, read once and never changed.
use crate::cli::Cli;

pub const DEFAULT_DEADLINE: &str = "2024-12-31T23:59:59Z";
pub const DEFAULT_TITLE: &str = "Event Countdown";
pub const DEFAULT_SUBTITLE: &str = "Counting down to the big moment";
pub const DEFAULT_DONE: &str = "It's Time!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub deadline: String,
    pub title: String,
    pub subtitle: String,
    pub done_text: String,
    pub confetti: bool,
    pub accent: Option<String>,
    pub bg: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            done_text: DEFAULT_DONE.to_string(),
            confetti: false,
            accent: None,
            bg: None,
        }
    }
}

impl Config {
    /// Build the configuration from parsed arguments. Empty values count
    /// as unset and fall back to the defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            deadline: non_empty(&cli.deadline)
                .map(|d| d.trim().to_string())
                .unwrap_or(defaults.deadline),
            title: non_empty(&cli.title).unwrap_or(defaults.title),
            subtitle: non_empty(&cli.subtitle).unwrap_or(defaults.subtitle),
            done_text: non_empty(&cli.done).unwrap_or(defaults.done_text),
            confetti: is_enabled(cli.confetti.as_deref()),
            accent: non_empty(&cli.accent),
            bg: non_empty(&cli.bg),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Only the word `true`, in any case, enables a flag.
pub fn is_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
