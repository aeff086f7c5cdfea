//! Logging Infrastructure
//!
//! Structured logging setup for callers embedding the engine.

use std::path::Path;

use crate::config::Config;

/// Initialize the logger from engine config
pub fn init_logger(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

/// Initialize the logger with optional rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "booking-engine");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one test may install the global subscriber in this binary
    #[test]
    fn init_falls_back_to_stdout_when_log_dir_is_missing() {
        init_logger_with_file(Some("debug"), Some("/nonexistent/booking-engine-logs"));
        tracing::debug!("logger initialized");
    }
}
