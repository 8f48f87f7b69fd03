use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Filter precedence: an explicit `filter` (env_logger syntax, e.g.
/// `"cornerlabel_ui=debug"`), then `RUST_LOG`, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Raises the default level by `verbosity` steps above `Info` (`-v`, `-vv`).
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.default_level = match verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        self
    }

    /// The filter string the logger is built from, given the `RUST_LOG` value.
    pub fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.filter
            .clone()
            .or(rust_log.filter(|f| !f.trim().is_empty()))
            .unwrap_or_else(|| self.default_level.as_str().to_ascii_lowercase())
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Only the first call has effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());
        let result = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        // An embedding application may have installed its own logger.
        if result.is_ok() {
            log::debug!("logging initialized with filter {filter:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig { filter: Some("cornerlabel_ui=trace".into()), ..Default::default() };
        assert_eq!(config.resolve_filter(Some("warn".into())), "cornerlabel_ui=trace");
    }

    #[test]
    fn rust_log_beats_default_level() {
        assert_eq!(LoggingConfig::default().resolve_filter(Some("warn".into())), "warn");
    }

    #[test]
    fn blank_rust_log_falls_back_to_level() {
        let config = LoggingConfig::default().verbosity(1);
        assert_eq!(config.resolve_filter(Some("  ".into())), "debug");
        assert_eq!(LoggingConfig::default().verbosity(5).resolve_filter(None), "trace");
        assert_eq!(LoggingConfig::default().resolve_filter(None), "info");
    }
}
