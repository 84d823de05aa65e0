use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "cameo_ui=debug,cameo_engine=trace"). When unset, `RUST_LOG` is consulted,
/// then the default level applies.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Lowers the default level from `info` to `warn`.
    pub quiet: bool,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Default configuration with `quiet` set.
    pub fn quiet() -> Self {
        Self { quiet: true, ..Self::default() }
    }

    fn default_level(&self) -> log::LevelFilter {
        if self.quiet { log::LevelFilter::Warn } else { log::LevelFilter::Info }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            quiet: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. If another logger was installed
/// first, that logger stays in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter.as_deref() {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level());
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_lowers_default_level() {
        assert_eq!(LoggingConfig::default().default_level(), log::LevelFilter::Info);
        assert_eq!(LoggingConfig::quiet().default_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::quiet());
        init_logging(LoggingConfig::default());
    }
}
