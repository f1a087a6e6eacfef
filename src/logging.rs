use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a log file is configured (`logging.file` or
/// `--log-file`), because the terminal UI owns stdout. `RUST_LOG` takes
/// precedence over `logging.level`. Returns `Ok(false)` when logging stays
/// off.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<bool> {
    let Some(log_path) = config.file.as_deref() else {
        return Ok(false);
    };

    let file = File::options().create(true).append(true).open(log_path)?;

    // An unparsable RUST_LOG falls back to `logging.level`.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    tracing::info!(path = %log_path.display(), "Logging initialised");
    Ok(true)
}
