//! Process-level setup shared by webget binaries.

/// Initializes a tracing Subscriber for logging.
///
/// The filter is taken from the `RUST_LOG` environment variable.
pub fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Loads a `.env` file from the current directory or any of its parents,
/// if one exists. Missing files are not an error.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "loaded .env");
    }
}
