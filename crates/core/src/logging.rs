use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `default_level`. Output
/// always goes to stderr; when `log_dir` is given a daily-rolling file named
/// after `component` is written there as well and its guard is returned. The
/// guard must be kept alive for buffered lines to be flushed.
pub fn init_logging(
    component: &str,
    default_level: &str,
    log_dir: Option<&Path>,
) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            // Files look like cli.log.2024-01-21
            let file_appender = tracing_appender::rolling::daily(dir, component);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            let _ = registry.with(file_layer).try_init();
            Some(guard)
        }
        None => {
            let _ = registry.try_init();
            None
        }
    }
}
