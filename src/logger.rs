//! Opt-in console logger for applications embedding the client.
//!
//! The client only talks to the `log` facade; nothing is printed until
//! [`init`] or [`init_with_config`] installs this logger.

use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::RwLock;

static CONSOLE_LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

pub fn init() -> Result<(), String> {
    init_with_config(LoggerConfig::default())
}

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    log::set_logger(&*CONSOLE_LOGGER).map_err(|e| format!("Failed to set logger: {:?}", e))?;

    log::set_max_level(config.min_level);
    CONSOLE_LOGGER.update_config(config);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub show_colors: bool,
    pub output_json: bool,
    pub include_timestamp: bool,
    pub timestamp_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::Info,
            show_colors: true,
            output_json: false,
            include_timestamp: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.output_json = enabled;
        self
    }

    pub fn production() -> Self {
        Self {
            min_level: LevelFilter::Info,
            show_colors: false,
            output_json: true,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self {
            min_level: LevelFilter::Debug,
            show_colors: true,
            output_json: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct LogLine<'a> {
    timestamp: DateTime<Utc>,
    level: &'a str,
    module: &'a str,
    message: String,
}

pub struct ConsoleLogger {
    config: RwLock<LoggerConfig>,
}

impl ConsoleLogger {
    fn new() -> Self {
        Self {
            config: RwLock::new(LoggerConfig::default()),
        }
    }

    fn update_config(&self, new_config: LoggerConfig) {
        if let Ok(mut config) = self.config.write() {
            *config = new_config;
        }
    }

    fn level_color(level: Level) -> Color {
        match level {
            Level::Trace => Color::Cyan,
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    fn format_line(line: &LogLine<'_>, level: Level, config: &LoggerConfig) -> String {
        if config.output_json {
            return serde_json::to_string(line).unwrap_or_default();
        }

        let mut output = String::new();

        if config.include_timestamp {
            let timestamp = line.timestamp.format(&config.timestamp_format).to_string();
            if config.show_colors {
                output.push_str(&format!("{} ", timestamp.bright_black()));
            } else {
                output.push_str(&format!("{} ", timestamp));
            }
        }

        if config.show_colors {
            output.push_str(&format!(
                "[{}] {}::{}",
                line.level.color(Self::level_color(level)).bold(),
                line.module.bright_blue(),
                line.message
            ));
        } else {
            output.push_str(&format!("[{}] {}::{}", line.level, line.module, line.message));
        }

        output
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.read() {
            Ok(config) => metadata.level() <= config.min_level,
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level().as_str(),
            module: record.module_path().unwrap_or("unknown"),
            message: record.args().to_string(),
        };

        if let Ok(config) = self.config.read() {
            let rendered = Self::format_line(&line, record.level(), &config);
            let _ = writeln!(io::stderr(), "{}", rendered);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogLine<'static> {
        LogLine {
            timestamp: Utc::now(),
            level: "DEBUG",
            module: "yagpt::yandex::instruct_client",
            message: "response status 200 OK".to_string(),
        }
    }

    #[test]
    fn test_logger_config() {
        let config = LoggerConfig::development();
        assert_eq!(config.min_level, LevelFilter::Debug);
        assert!(config.show_colors);

        let prod_config = LoggerConfig::production();
        assert!(!prod_config.show_colors);
        assert!(prod_config.output_json);
    }

    #[test]
    fn test_plain_line() {
        let config = LoggerConfig::new().with_colors(false);
        let rendered = ConsoleLogger::format_line(&sample(), Level::Debug, &config);
        assert!(rendered.ends_with("[DEBUG] yagpt::yandex::instruct_client::response status 200 OK"));
    }

    #[test]
    fn test_json_line() {
        let config = LoggerConfig::new().with_json_output(true);
        let rendered = ConsoleLogger::format_line(&sample(), Level::Debug, &config);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["level"], "DEBUG");
        assert_eq!(value["message"], "response status 200 OK");
    }

    #[test]
    fn test_logger_initialization() {
        assert!(init_with_config(LoggerConfig::development()).is_ok());
        assert!(init().is_err());
    }
}
