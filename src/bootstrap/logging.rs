//! Tracing subscriber set-up
//!
//! - `RUST_LOG` wins when set; otherwise debug in dev builds, info in release.
//! - Always logs to stdout; optionally to `<logs_dir>/stockkeeper.log` through
//!   a non-blocking writer whose guard lives for the whole process.

use std::{fs, io, path::Path, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

use sk_core::config::AppConfig;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "stockkeeper.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("sk_core={level}"),
        format!("sk_app={level}"),
        // Every store read logs at debug; keep it out of release logs.
        if is_dev { "sk_infra=debug" } else { "sk_infra=warn" }.to_string(),
    ]
}

/// Install the global subscriber. Call once, before any other work.
///
/// # Errors
///
/// Fails if a global subscriber is already registered. A log directory that
/// cannot be created only disables the file layer.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let file_writer = if config.file_logging && !config.logs_dir.as_os_str().is_empty() {
        match build_file_writer(&config.logs_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err:#}");
                None
            }
        }
    } else {
        None
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs dir: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_directives_are_verbose() {
        let directives = build_filter_directives(true);
        assert!(directives.contains(&"debug".to_string()));
        assert!(directives.contains(&"sk_infra=debug".to_string()));
        assert!(directives.contains(&"sk_app=debug".to_string()));
    }

    #[test]
    fn release_directives_quiet_storage() {
        let directives = build_filter_directives(false);
        assert!(directives.contains(&"info".to_string()));
        assert!(directives.contains(&"sk_infra=warn".to_string()));
        assert!(directives.contains(&"sk_core=info".to_string()));
    }

    #[test]
    fn directives_parse_as_env_filter() {
        for is_dev in [true, false] {
            let joined = build_filter_directives(is_dev).join(",");
            assert!(EnvFilter::try_new(&joined).is_ok(), "bad directives: {joined}");
        }
    }
}
