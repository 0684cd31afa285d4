//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Output goes to stderr so `preview` can stream CSV on stdout. Cell values
//! are personal data and are never logged; only counts and column names are.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "org_hasher=debug"
    } else {
        "org_hasher=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence when set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
