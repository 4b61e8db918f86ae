use std::fs::create_dir_all;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_DIR: &str = "logs";

/// Installs the global tracing subscriber.
///
/// Logs go to a daily-rolling file `logs/<log_file>` and, when `log_to_stdout` is set, to
/// stdout as well. `LOG_LEVEL` from the environment wins over `default_level`.
///
/// Keep the returned guard alive for the life of the process or buffered lines are lost.
pub fn init_logging(log_file: &str, default_level: &str, log_to_stdout: bool) -> WorkerGuard {
    create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
