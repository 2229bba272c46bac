//! fern logger for the server binary.
//!
//! One line per record: `[rfc3339 - LEVEL] message [file:line]`, written to
//! an append-only file when configured, else to stdout.

use crate::error::{Result as ServerErrorResult, ServerError};

use vu_config::LoggingConfig;

use std::fmt;
use std::path::Path;
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Dependencies that log every request or statement at info
const NOISY_TARGETS: [&str; 4] = ["sqlx", "hyper", "hyper_util", "reqwest"];

/// Install the global logger. `log_file` is the resolved file path, if the
/// config names one; colors apply to stdout only.
pub fn initialize(config: &LoggingConfig, log_file: Option<&Path>) -> ServerErrorResult<()> {
    let level = config.level.0;

    let mut root = Dispatch::new().level(level);
    for target in NOISY_TARGETS {
        root = root.level_for(target, level.min(LevelFilter::Warn));
    }

    let sink = match log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                ServerError::io(format!("Failed to open log file {}", path.display()), e)
            })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, record.level(), message, record))
                .chain(file)
        }
        None if config.colored => {
            let colors = ColoredLevelConfig::new()
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red)
                .debug(Color::Blue)
                .trace(Color::Magenta);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout()),
    };

    root.chain(sink).apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    // Dependencies on tracing show up in the same stream
    tracing_log::LogTracer::init().ok();

    match log_file {
        Some(path) => info!("Logging at {} to {}", level, path.display()),
        None => info!("Logging at {} to stdout", level),
    }

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    level: impl fmt::Display,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
