/// CLI argument parsing and the one-shot `show` command.
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::countdown::{self, Snapshot};
use crate::deadline::{self, Deadline};

#[derive(Parser, Debug, Default)]
#[command(
    name = "countdown",
    version,
    about = "countdown - A terminal event countdown"
)]
pub struct Cli {
    /// Target time: ISO-8601 (recommended) or YYYYMMDDHHmmss in local time
    #[arg(long, env = "COUNTDOWN_DEADLINE")]
    pub deadline: Option<String>,
    #[arg(long, env = "COUNTDOWN_TITLE")]
    pub title: Option<String>,
    #[arg(long, env = "COUNTDOWN_SUBTITLE")]
    pub subtitle: Option<String>,
    /// Text shown once the countdown completes
    #[arg(long, env = "COUNTDOWN_DONE")]
    pub done: Option<String>,
    /// "true" to celebrate on completion
    #[arg(long, env = "COUNTDOWN_CONFETTI")]
    pub confetti: Option<String>,
    /// Accent color, #RRGGBB or a color name
    #[arg(long, env = "COUNTDOWN_ACCENT")]
    pub accent: Option<String>,
    /// Background color, #RRGGBB or a color name
    #[arg(long, env = "COUNTDOWN_BG")]
    pub bg: Option<String>,
    /// Write logs to this file
    #[arg(long, env = "COUNTDOWN_LOG")]
    pub log_file: Option<PathBuf>,
    /// Write logs to the default location in the user's data directory
    #[arg(long)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full-screen countdown (the default)
    Watch,
    /// Print the remaining time once and exit
    Show,
}

/// Print a single countdown line for `config` and return.
pub fn run_show(config: &Config) -> Result<()> {
    println!("{}", show_line_at(config, Utc::now()));
    Ok(())
}

fn show_line_at(config: &Config, now: DateTime<Utc>) -> String {
    let deadline = deadline::parse(&config.deadline);
    show_line(config, deadline, &countdown::format_remaining(deadline, now))
}

fn show_line(config: &Config, deadline: Deadline, snapshot: &Snapshot) -> String {
    let [days, hours, minutes, seconds] = snapshot.fields();
    if snapshot.has_time() {
        format!(
            "{}: {days}d {hours}h {minutes}m {seconds}s until {}",
            config.title,
            deadline.describe(&config.deadline)
        )
    } else if !deadline.is_valid() {
        format!(
            "{}: {days}d {hours}h {minutes}m {seconds}s (cannot read deadline '{}')",
            config.title, config.deadline
        )
    } else {
        format!("{}: {}", config.title, config.done_text)
    }
}
