use std::{fmt::Display, fs::File, str::FromStr, sync::Mutex};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::config::LoggerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// Path of a fresh log file inside the configured log directory.
pub fn log_file_path(config: &LoggerConfig) -> String {
    format!(
        "{}/fa_run_{}.txt",
        config.get_log_dir().trim_end_matches('/'),
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Installs a global `tracing` subscriber as described by `config`.
/// Does nothing if logging is disabled. Fails if the log file can not be
/// created or a global subscriber is already installed.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    if !*config.get_enabled() {
        return Ok(());
    }

    let level = config.get_log_level().to_tracing_level();

    if *config.get_log_file() {
        std::fs::create_dir_all(config.get_log_dir())?;
        let file = File::create(log_file_path(config))?;

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
    }
}

#[test]
fn test_log_level_from_str() {
    assert_eq!("dbg".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
    assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("err".parse::<LogLevel>(), Ok(LogLevel::Error));
    assert!("verbose".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_level_round_trip_display() {
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
    }
    assert_eq!(LogLevel::Warn.to_tracing_level(), Level::WARN);
}

#[test]
fn test_log_file_path() {
    let config = LoggerConfig::default().with_log_dir("./out/");
    let path = log_file_path(&config);

    assert!(path.starts_with("./out/fa_run_"));
    assert!(path.ends_with(".txt"));
}

#[test]
fn test_disabled_logger_is_noop() {
    assert!(init_logger(&LoggerConfig::default()).is_ok());
}
