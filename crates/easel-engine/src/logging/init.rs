use std::sync::Once;

use log::LevelFilter;

/// Logger setup for the studio binary.
///
/// Filter precedence: `env_filter` (env_logger syntax, e.g.
/// `"easel_turtle=debug"`), then `RUST_LOG`, then `default_level` with the
/// GPU stack capped at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// wgpu logs adapter probing and per-frame detail at info.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        if builder_for(config, env.as_deref()).try_init().is_err() {
            // Someone else installed a logger first; keep theirs.
            return;
        }
        log::debug!("logging initialized");
    });
}

fn builder_for(config: LoggingConfig, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.write_style(config.write_style);

    match config.env_filter.as_deref().or(rust_log) {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(config.default_level);
            for module in NOISY_MODULES {
                builder.filter_module(module, LevelFilter::Warn);
            }
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_level(config: LoggingConfig, rust_log: Option<&str>) -> LevelFilter {
        builder_for(config, rust_log).build().filter()
    }

    #[test]
    fn default_level_applies_without_filters() {
        assert_eq!(max_level(LoggingConfig::default(), None), LevelFilter::Info);
    }

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(max_level(config, Some("error")), LevelFilter::Debug);
    }

    #[test]
    fn rust_log_beats_default_level() {
        assert_eq!(max_level(LoggingConfig::default(), Some("trace")), LevelFilter::Trace);
    }
}
