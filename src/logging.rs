//! Logging setup

use tracing_subscriber::EnvFilter;

/// Parse a level name, falling back to `warn` for anything unrecognised.
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "off" | "error" => tracing::Level::ERROR,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    }
}

/// Install the global subscriber.  Output goes to stderr so it never mixes
/// with the rendered view on stdout; `RUST_LOG` overrides `level`.
pub(crate) fn init(level: &str) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(parse_log_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_log_level("DEBUG"), tracing::Level::DEBUG);
        assert_eq!(parse_log_level("info"), tracing::Level::INFO);
        assert_eq!(parse_log_level("off"), tracing::Level::ERROR);
        assert_eq!(parse_log_level("loud"), tracing::Level::WARN);
    }
}
