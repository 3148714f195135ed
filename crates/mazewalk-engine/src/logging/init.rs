use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` directive syntax, e.g.
/// `"mazewalk_engine=trace,mazewalk_maze=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the directive string: explicit filter, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        self.env_filter
            .as_deref()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // A test harness or embedding host may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig {
            env_filter: Some("mazewalk_engine=trace".into()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_filter(Some("warn")), "mazewalk_engine=trace");
    }

    #[test]
    fn rust_log_used_when_no_explicit_filter() {
        assert_eq!(LoggingConfig::default().resolve_filter(Some("debug")), "debug");
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        assert_eq!(LoggingConfig::default().resolve_filter(Some("  ")), DEFAULT_FILTER);
        assert_eq!(LoggingConfig::default().resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
