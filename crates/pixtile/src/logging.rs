//! File logging, enabled through the `PIXTILE_LOG` environment variable.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `pixtile.log` in the platform data directory instead.

use std::{env, fs, fs::File, path::PathBuf, sync::Mutex};

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `pixtile_patterns=trace`.
pub const LOG_ENV: &str = "PIXTILE_LOG";

const LOG_FILE: &str = "pixtile.log";

/// Install the global subscriber if `PIXTILE_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> color_eyre::Result<Option<PathBuf>> {
    let Ok(filter) = env::var(LOG_ENV) else {
        return Ok(None);
    };

    let dirs = ProjectDirs::from("", "", "pixtile")
        .ok_or_else(|| eyre!("could not determine a data directory for the log file"))?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path).wrap_err_with(|| format!("failed to create {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(Some(path))
}
