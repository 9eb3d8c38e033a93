//! Tracing configuration for sheetclip
//!
//! Console output goes to stderr so command output on stdout stays clean.
//! A non-blocking file layer is added when a log directory is configured.

use std::{fs, io, path::Path, sync::OnceLock};

use sc_core::config::AppConfig;
use sc_core::settings::DEFAULT_LOG_LEVEL;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "sheetclip.log";

/// Build the default filter directives for tracing
///
/// The configured level applies to every sheetclip crate; dependencies stay
/// at `warn`.
fn build_filter_directives(level: &str) -> Vec<String> {
    let level = if level.trim().is_empty() {
        DEFAULT_LOG_LEVEL
    } else {
        level.trim()
    };
    vec![
        "warn".to_string(),
        format!("sheetclip={level}"),
        format!("sheetclip_lib={level}"),
        format!("sc_core={level}"),
        format!("sc_app={level}"),
        format!("sc_platform={level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(&config.log_level).join(","))
    });

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_writer = if config.log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
