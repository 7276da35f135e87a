//! Server and logging configuration (`[server]`, `[logging]` sections)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind: String,
    /// Worker thread count (default: number of CPUs)
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily-rolling log files; stderr only when unset or blank
    pub directory: Option<String>,
}

impl LoggingConfig {
    /// The log directory, if file logging is enabled
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_log_directory_disables_file_logging() {
        let config: LoggingConfig = toml::from_str("directory = \"\"").unwrap();
        assert_eq!(config.directory, Some(String::new()));
        assert_eq!(config.directory(), None);

        let config: LoggingConfig = toml::from_str("directory = \"  \"").unwrap();
        assert_eq!(config.directory(), None);
    }

    #[test]
    fn test_log_directory_when_set() {
        let config: LoggingConfig = toml::from_str("directory = \"/var/log/portfolio\"").unwrap();
        assert_eq!(config.directory(), Some("/var/log/portfolio"));
        assert_eq!(LoggingConfig::default().directory(), None);
    }
}
