mod app;
mod celebrate;
mod cli;
mod color;
mod config;
mod confetti;
mod countdown;
mod deadline;
mod event;
mod logging;
mod ticker;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Command;
use crate::config::Config;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(path) = logging::log_path(&cli_opts) {
        logging::init(&path)?;
    }
    let config = Config::from_cli(&cli_opts);

    match cli_opts.command.unwrap_or(Command::Watch) {
        Command::Show => cli::run_show(&config),
        Command::Watch => {
            let mut app = app::App::new(config, Some(confetti::ConfettiField::new()));
            let mut terminal = tui::init()?;
            let result = event::run(&mut app, &mut terminal);

            tui::restore()?;

            result
        }
    }
}
