// Native-only: the wasm build never installs a subscriber
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Filter directives for the CLI: `RUST_LOG` wins, then `-v`, then warnings only.
pub fn filter_for(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// Install a stderr subscriber so stdout stays clean for results.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }

    #[test]
    fn test_filter_builds_without_env() {
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(filter_for(true).to_string(), VERBOSE_FILTER);
            assert_eq!(filter_for(false).to_string(), DEFAULT_FILTER);
        }
    }
}
