use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or `debug` when verbose.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "spendbook=debug" } else { "spendbook=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
