//! Diagnostic logging for fuzzy-filer.
//!
//! The terminal belongs to the picker while it runs, so logs never go to it. A subscriber is
//! installed only when `FUZZY_FILER_LOG` names a file; the filter is read from
//! `FUZZY_FILER_LOG_LEVEL` in `EnvFilter` syntax and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Names the log file. Logging is off when unset.
pub const LOG_FILE_ENV: &str = "FUZZY_FILER_LOG";
/// `EnvFilter` directives, e.g. `debug` or `fuzzy_filer::core=trace`.
pub const LOG_LEVEL_ENV: &str = "FUZZY_FILER_LOG_LEVEL";
const DEFAULT_LEVEL: &str = "info";

/// Installs the file subscriber if `FUZZY_FILER_LOG` is set.
///
/// Failing to open the file or to install the subscriber only prints a warning; the picker runs
/// either way.
pub fn init() {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return;
    };
    if let Err(e) = init_file(Path::new(&path)) {
        eprintln!("[fuzzy-filer] logging disabled: {}", e);
    }
}

fn init_file(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
}
