use tracing_subscriber::{fmt, EnvFilter};

const VERBOSE_LOG_LEVEL: &str = "img_resize=debug";
const DEFAULT_LOG_LEVEL: &str = "img_resize=warn";

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Install the global tracing subscriber, writing diagnostics to stderr so
/// stdout only carries the resize report.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "img_resize=debug");
        assert_eq!(default_directive(false), "img_resize=warn");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        assert!(!init(true));
    }
}
