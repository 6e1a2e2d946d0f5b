// Debug logging for Penalty Keeper
// Routes `tracing` output to a file when --debug is passed; the TUI owns the terminal

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing_subscriber::EnvFilter;

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("penalty-keeper-debug.log")
}

/// Initialize debug logging to file
///
/// # Behavior
/// - If enabled=false: no subscriber is installed and every `tracing` call is a no-op
/// - If enabled=true: truncates the log file, writes a header and installs a
///   `fmt` subscriber filtered by `RUST_LOG` (default `info`)
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Penalty Keeper Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(())
}
