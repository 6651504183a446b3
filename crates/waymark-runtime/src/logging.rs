use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;

use crate::Result;

pub const LOG_FILE_NAME: &str = "waymark.log";

/// Where log lines go
pub enum LogTarget<'a> {
    /// Plain stderr, used by one-shot commands
    Stderr,
    /// Append to a file; the interactive editor owns the terminal
    File(&'a Path),
}

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn init_logging(level: LevelFilter, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
    Ok(())
}
