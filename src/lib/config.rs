use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logger::LogLevel;

/// Controls [`crate::logger::init_logger`]. Missing fields in a TOML file
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    enabled: bool,
    log_file: bool,
    log_dir: String,
    log_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            enabled: false,
            log_file: false,
            log_dir: "./logs".to_string(),
            log_level: LogLevel::Warn,
        }
    }
}

impl LoggerConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_log_file(mut self, log_file: bool) -> Self {
        self.log_file = log_file;
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<String>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn get_enabled(&self) -> &bool {
        &self.enabled
    }

    pub fn get_log_file(&self) -> &bool {
        &self.log_file
    }

    pub fn get_log_dir(&self) -> &str {
        &self.log_dir
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaConfig {
    logger: LoggerConfig,
}

impl FaConfig {
    pub fn with_logger(mut self, logger: LoggerConfig) -> Self {
        self.logger = logger;
        self
    }

    pub fn get_logger(&self) -> &LoggerConfig {
        &self.logger
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        let canonic_path = std::fs::canonicalize(file_path)?;
        let content = std::fs::read_to_string(canonic_path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_optional_file<P: AsRef<Path>>(file_path: Option<P>) -> anyhow::Result<Self> {
        match file_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
