use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QUIZ_WORKER_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs a stderr-only subscriber; stdout is reserved for the JSON response.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
