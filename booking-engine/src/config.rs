//! Engine configuration
//!
//! Every setting can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | SHIFT_ID_PREFIX | SH | prefix passed to the sequential ID allocator |
//! | DEFAULT_WINDOW_DAYS | 7 | viewing-window length for `upcoming_shifts` |
//! | LOG_LEVEL | info | tracing level for `utils::logger` |
//! | LOG_DIR | (unset) | rolling log file directory, stdout if unset |

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for allocated shift IDs
    pub shift_id_prefix: String,
    /// Default viewing-window length in days
    pub default_window_days: u32,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional rolling log directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            shift_id_prefix: std::env::var("SHIFT_ID_PREFIX").unwrap_or_else(|_| "SH".into()),
            default_window_days: std::env::var("DEFAULT_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift_id_prefix: "SH".into(),
            default_window_days: 7,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other
    #[test]
    fn from_env_applies_overrides_and_defaults() {
        unsafe {
            std::env::set_var("SHIFT_ID_PREFIX", "BK");
            std::env::set_var("DEFAULT_WINDOW_DAYS", "14");
            std::env::remove_var("LOG_LEVEL");
            std::env::remove_var("LOG_DIR");
        }
        let config = Config::from_env();
        assert_eq!(config.shift_id_prefix, "BK");
        assert_eq!(config.default_window_days, 14);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);

        // Unparseable numeric falls back to the default
        unsafe {
            std::env::set_var("DEFAULT_WINDOW_DAYS", "a week");
            std::env::remove_var("SHIFT_ID_PREFIX");
        }
        let config = Config::from_env();
        assert_eq!(config.shift_id_prefix, "SH");
        assert_eq!(config.default_window_days, 7);

        unsafe {
            std::env::remove_var("DEFAULT_WINDOW_DAYS");
        }
    }
}
