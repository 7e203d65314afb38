//! Logging setup.

use tracing_subscriber::filter::EnvFilter;

/// Environment variable naming a file to append logs to instead of stderr.
pub const LOG_PATH_ENV: &str = "FOCUSDIM_LOG_PATH";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honoured; without it only `focusdim` events at info and
/// above are emitted. Call once, at startup.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("focusdim=info"));

    if let Some(path) = std::env::var_os(LOG_PATH_ENV) {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
