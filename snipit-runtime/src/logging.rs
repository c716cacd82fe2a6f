use anyhow::Context;
use snipit_core::config::{LogMode, LogSettings};
use std::fs::{self, File, OpenOptions};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Flushes buffered log lines when the process exits.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Opens the log file, recreating it in truncate mode.
pub fn open_log_file(settings: &LogSettings) -> anyhow::Result<File> {
    if let Some(parent) = settings.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory: {}", parent.display()))?;
    }

    let mut opts = OpenOptions::new();
    opts.create(true);
    match settings.mode {
        LogMode::Truncate => {
            opts.write(true).truncate(true);
        }
        LogMode::Append => {
            opts.append(true);
        }
    }
    opts.open(&settings.path)
        .with_context(|| format!("open log file: {}", settings.path.display()))
}

/// Installs the global subscriber: a file layer plus stdout.
///
/// `RUST_LOG` overrides the configured level. `log` records from the other
/// crates are bridged into the same subscriber.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let file = open_log_file(settings)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(file_writer);

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_writer(std::io::stdout);

    registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .context("install tracing subscriber")?;

    let _ = LOG_GUARD.set(guard);
    Ok(())
}
