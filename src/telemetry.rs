//! Log subscriber setup.
//!
//! Interactive play owns the terminal, so logs only go to a file there. Headless runs
//! log to stderr and keep stdout for the JSON report.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, Mode};

pub fn init_tracing(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let installed = match (&config.log_path, &config.mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, Mode::Headless(_)) => builder.with_writer(std::io::stderr).try_init(),
        (None, Mode::Interactive) => return Ok(()),
    };
    installed.map_err(|e| anyhow!("installing log subscriber: {e}"))
}
