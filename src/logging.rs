//! Diagnostic logging to stderr
//!
//! User-facing output goes to stdout through `ui`; tracing events are for
//! troubleshooting and stay quiet unless asked for.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter (e.g. `taiwan_skill=debug`)
pub const LOG_ENV: &str = "TAIWAN_SKILL_LOG";

/// Initialize the global subscriber
///
/// `TAIWAN_SKILL_LOG` wins when set; otherwise `--verbose` enables debug output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
