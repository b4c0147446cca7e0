use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes levelled, timestamped lines to a log file and optionally to stdout.
///
/// A logger built with [`Logger::sink`] has no file and drops everything that
/// is not sent to the console.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Creates a new `Logger` writing to `<log_dir>/<name>.log`.
    ///
    /// # Parameters
    /// - `log_dir`: Existing directory where the log file is created.
    /// - `name`: Base name of the log file, without extension.
    ///
    /// The file is truncated if it already exists.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }

        let sanitized = name.replace([':', '/', '\\'], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file: Some(log_file),
        })
    }

    /// Creates a logger without a backing file.
    pub fn sink() -> Self {
        Logger { log_file: None }
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message),
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message),
            };
            print!("{}", colored_message);
            io::stdout().flush()?;
        }

        if let Some(path) = &self.log_file {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(log_message.as_bytes())?;
            file.flush()?;
        }

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("food_map_logger_{}", name));
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        dir
    }

    #[test]
    fn test_logger_writes_levels_to_file() {
        let log_dir = scratch_dir("levels");
        let logger = Logger::new(&log_dir, "food_map").expect("Failed to create logger");

        logger
            .info("map mounted", Color::Green, false)
            .expect("Failed to log info");
        logger.warn("place outside bounds", false).expect("Failed to log warn");
        logger.error("window failed", false).expect("Failed to log error");

        let contents =
            fs::read_to_string(log_dir.join("food_map.log")).expect("Failed to read log file");

        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("map mounted"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("[ERROR]"));
        assert_eq!(contents.lines().count(), 3);

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_new_truncates_previous_log() {
        let log_dir = scratch_dir("truncate");
        let first = Logger::new(&log_dir, "food_map").unwrap();
        first.info("old line", Color::White, false).unwrap();

        let second = Logger::new(&log_dir, "food_map").unwrap();
        second.info("new line", Color::White, false).unwrap();

        let contents = fs::read_to_string(second.path().unwrap()).unwrap();
        assert!(!contents.contains("old line"));
        assert!(contents.contains("new line"));

        fs::remove_dir_all(log_dir).unwrap();
    }

    #[test]
    fn test_invalid_path() {
        let result = Logger::new(Path::new("/invalid/path"), "food_map");
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));
    }

    #[test]
    fn test_sink_has_no_file() {
        let logger = Logger::sink();
        assert!(logger.path().is_none());
        assert!(logger.info("dropped", Color::Cyan, false).is_ok());
    }
}
