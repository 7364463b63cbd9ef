use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this more than once
/// keeps the first subscriber; the return value says whether this call
/// installed it.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.ansi)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        let config = LoggingConfig::default();
        init(&config);
        assert!(!init(&config));
    }
}
