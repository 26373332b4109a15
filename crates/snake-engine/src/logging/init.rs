use std::sync::Once;

/// Logger configuration.
///
/// Filters follow the `env_logger` syntax (e.g. "info", "warn",
/// "snake_game=debug,wgpu_core=warn").
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `fallback_filter`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub fallback_filter: String,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_filter: "info".to_string(),
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Sets the filter used when neither `env_filter` nor `RUST_LOG` is present.
    pub fn with_fallback(mut self, filter: impl Into<String>) -> Self {
        self.fallback_filter = filter.into();
        self
    }

    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log.filter(|f| !f.trim().is_empty()))
            .unwrap_or_else(|| self.fallback_filter.clone())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}
