use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path for TUI mode.
pub const LOG_ENV: &str = "RECORDVIEW_LOG";

/// Initialize tracing for TUI mode.
///
/// Logging is disabled unless `RECORDVIEW_LOG` names a file path; writing to
/// stdout would corrupt the display. Each run gets its own file
/// `{path}.{timestamp}.{pid}`.
pub fn init_tracing_to_file() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .init();
}

/// Initialize tracing to stdout for `serve` mode.
pub fn init_tracing_stdout() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
