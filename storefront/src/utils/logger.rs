//! Logging Infrastructure
//!
//! Human-readable output in development, JSON lines in production.

use std::path::Path;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. A missing
/// `log_dir` falls back to stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>, json: bool) {
    let level = log_level.unwrap_or("info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("storefront={level},shared={level}").into());

    let (writer, ansi) = match log_dir.and_then(rolling_writer) {
        Some(file_writer) => (file_writer, false),
        None => (BoxMakeWriter::new(std::io::stdout), !json),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Daily rolling file writer, `None` when the directory does not exist
fn rolling_writer(dir: &str) -> Option<BoxMakeWriter> {
    let log_path = Path::new(dir);
    if !log_path.exists() {
        eprintln!("Log directory {dir} does not exist, logging to stdout");
        return None;
    }
    let file_appender = tracing_appender::rolling::daily(log_path, "storefront");
    Some(BoxMakeWriter::new(file_appender))
}
