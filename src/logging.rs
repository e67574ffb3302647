/// File logging. The terminal belongs to the UI, so logs only go to a file
/// and only when one was asked for.
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, SecondsFormat};

use crate::cli::Cli;

/// Which file to log to, if any. An explicit path wins over `--log`.
pub fn log_path(cli: &Cli) -> Option<PathBuf> {
    cli.log_file
        .clone()
        .or_else(|| cli.log.then(default_log_path))
}

/// Returns the default log path inside the user's data directory.
/// Falls back to `./countdown.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join("countdown").join("countdown.log"),
        None => PathBuf::from("countdown.log"),
    }
}

/// Install the file logger, creating the log's directory if needed.
pub fn init(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}
