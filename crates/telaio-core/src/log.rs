//! File-based logging with size-capped rotation.
//!
//! Disabled unless the configuration asks for it. Lines go to
//! `~/.config/telaio/logs/telaio.log`; once the file reaches the
//! configured cap it is renamed to `telaio.log.1` (one backup kept) and
//! a fresh file is started.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

const LOG_FILE_NAME: &str = "telaio.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

struct Sink {
    file: File,
    path: PathBuf,
    threshold: Level,
    cap: u64,
    len: u64,
}

impl Sink {
    fn open(path: PathBuf, threshold: Level, cap: u64) -> Option<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        let len = file.metadata().map(|m| m.len()).unwrap_or(0);
        Some(Self {
            file,
            path,
            threshold,
            cap,
            len,
        })
    }

    fn record(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.threshold {
            return;
        }
        if self.cap > 0 && self.len >= self.cap {
            self.rotate();
        }
        let line = format!("{} [{level}] {args}\n", clock());
        self.len += line.len() as u64;
        let _ = self.file.write_all(line.as_bytes());
    }

    fn rotate(&mut self) {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".1");
        let _ = fs::rename(&self.path, self.path.with_file_name(name));
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.len = 0;
    }
}

/// Initialises the global logger. Call once at daemon startup.
///
/// Does nothing if `config.enabled` is `false` or the log directory
/// cannot be created.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let logs = dir.join("logs");
    let _ = fs::create_dir_all(&logs);

    let threshold = config.level.parse().unwrap_or(Level::Info);
    let cap = config.max_file_mb * 1024 * 1024;
    if let Some(sink) = Sink::open(logs.join(LOG_FILE_NAME), threshold, cap) {
        let _ = SINK.set(Mutex::new(sink));
    }
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = SINK.get() else {
        return;
    };
    let Ok(mut sink) = mutex.lock() else {
        return;
    };
    sink.record(level, args);
}

fn clock() -> String {
    // UTC wall-clock seconds are enough for a trace log; no date and
    // no chrono dependency.
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!("DEBUG".parse(), Ok(Level::Debug));
        assert_eq!("Warn".parse(), Ok(Level::Warn));
        assert_eq!("nonsense".parse::<Level>(), Err(()));
    }

    #[test]
    fn sink_drops_lines_below_the_threshold() {
        let dir = temp_dir("threshold");
        let path = dir.join(LOG_FILE_NAME);
        let mut sink = Sink::open(path.clone(), Level::Warn, 0).unwrap();

        sink.record(Level::Debug, format_args!("dropped"));
        sink.record(Level::Error, format_args!("kept"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("dropped"));
        assert!(content.contains("[ERROR] kept"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sink_rotates_once_the_cap_is_reached() {
        let dir = temp_dir("rotate");
        let path = dir.join(LOG_FILE_NAME);
        let mut sink = Sink::open(path.clone(), Level::Debug, 64).unwrap();

        for i in 0..8 {
            sink.record(Level::Info, format_args!("line {i} with some padding"));
        }

        assert!(path.with_file_name("telaio.log.1").exists());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("telaio-log-{tag}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}
