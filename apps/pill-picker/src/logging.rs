//! File logging for the terminal UI
//!
//! Stdout belongs to the TUI (or to headless output), so logs only go to a
//! file, and only when `REDPILL_LOG` names one. `RUST_LOG` sets the filter.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log file path
pub const LOG_PATH_ENV: &str = "REDPILL_LOG";

/// Log file for this process: `{path}.{pid}` so parallel runs don't collide
pub fn log_file_path(base: &str, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}", base, pid))
}

/// Initialize tracing if `REDPILL_LOG` is set; otherwise logging stays off.
///
/// Returns the path of the log file in use.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_PATH_ENV).ok()?;
    let path = log_file_path(&base, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}
