// Tracing setup
//
// `RUST_LOG` wins when set; otherwise the crate logs at info (debug with -v)
// and dependencies at warn.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,mathagent={level},tower_http={level}")
}

/// Install the global subscriber. Call once from `main`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
