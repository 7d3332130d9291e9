use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static VERBOSITY: Mutex<u8> = Mutex::new(0);

/// Get the current verbosity level
pub fn get_verbosity() -> u8 {
    VERBOSITY.lock().ok().map(|v| *v).unwrap_or(0)
}

/// Convert verbosity level to a `tracing` filter directive
/// 0 = warn only, 1 = debug (-v), 2 = trace (-vv)
pub fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the logger with a verbosity level and an optional log file
///
/// The log file is truncated on each run. `tracing` events from the library
/// crates go to stderr, filtered by `RUST_LOG` when set and by the verbosity
/// level otherwise.
pub fn init_with_verbosity(verbosity: u8, log_file: Option<&Path>) -> Result<(), String> {
    if let Ok(mut v) = VERBOSITY.lock() {
        *v = verbosity;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_filter(verbosity)));
    // A subscriber may already be installed (tests, repeated init); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    match log_file {
        Some(path) => set_log_file(path),
        None => Ok(()),
    }
}

fn set_log_file(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    // Truncate log file on each run (overwrite instead of append)
    if path.exists() {
        let _ = fs::remove_file(path);
    }

    let mut log_file_guard = LOG_FILE
        .lock()
        .map_err(|_| "Log file lock poisoned".to_string())?;
    *log_file_guard = Some(path.to_path_buf());

    Ok(())
}

/// Write to log file
fn write_to_log(message: &str) {
    if let Ok(log_file_guard) = LOG_FILE.lock() {
        if let Some(ref log_path) = *log_file_guard {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{}] {}", timestamp, message);
            }
        }
    }
}

/// Log an informational message (to console if verbose >= 1, always to file)
pub fn info(message: &str) {
    write_to_log(&format!("INFO {}", message));
    if get_verbosity() >= 1 {
        eprintln!("{}", message);
    }
}

/// Log a debug message (to console if verbose >= 1, always to file)
pub fn debug(message: &str) {
    write_to_log(&format!("DEBUG {}", message));
    if get_verbosity() >= 1 {
        eprintln!("{} {}", "DEBUG:".blue().bold(), message);
    }
}

/// Log a warning message (to both file and console)
pub fn warn(message: &str) {
    write_to_log(&format!("WARN {}", message));
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Log an error message (to both file and console)
pub fn error(message: &str) {
    write_to_log(&format!("ERROR {}", message));
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Log a success message (to console for user feedback)
pub fn success(message: &str) {
    write_to_log(&format!("SUCCESS {}", message));
    let check = "\u{2714}".green().bold();
    eprintln!("{} {}", check, message);
}

/// Get the log file path for display
pub fn get_log_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_verbosity_to_filter() {
        assert_eq!(verbosity_to_filter(0), "warn");
        assert_eq!(verbosity_to_filter(1), "debug");
        assert_eq!(verbosity_to_filter(2), "trace");
        assert_eq!(verbosity_to_filter(9), "trace");
    }

    #[test]
    fn test_init_writes_log_file() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let log_path = temp_dir.path().join("logs").join("plx.log");

        assert!(init_with_verbosity(0, Some(&log_path)).is_ok());
        assert_eq!(get_verbosity(), 0);
        assert_eq!(get_log_path(), Some(log_path.clone()));

        warn("disk almost full");
        let content = fs::read_to_string(&log_path).unwrap_or_default();
        assert!(content.contains("WARN disk almost full"));
    }
}
