//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable carrying a tracing filter directive
pub const LOG_ENV: &str = "DIARIST_LOG";

/// Install a stderr subscriber. DIARIST_LOG takes precedence over `default_level`.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
