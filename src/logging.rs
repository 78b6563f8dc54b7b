//! Log file setup.
//!
//! The terminal belongs to the TUI, so logs go to `<log_dir>/jokecard.log`.
//! Verbosity comes from `JOKECARD_LOG` (an `EnvFilter` directive string),
//! defaulting to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "JOKECARD_LOG";
pub const LOG_FILE_NAME: &str = "jokecard.log";

/// Install the global subscriber.
///
/// Returns the log file path when file logging is active. A missing log dir
/// or an unopenable file leaves logging off instead of failing startup.
pub fn init(log_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = log_dir?;
    let (path, file) = match open_log_file(dir) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(path)
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> std::io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
