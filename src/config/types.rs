// Configuration types module
// Defines the configuration structures shared by the exercise binaries

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Only read by the `motd` binary
    #[serde(default)]
    pub motd: MotdConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads (defaults to CPU count when unset)
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Location of the plain-text message file served by the motd exercise
#[derive(Debug, Deserialize, Clone)]
pub struct MotdConfig {
    #[serde(default = "default_motd_file")]
    pub file: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_motd_file() -> String {
    "data/motd.txt".to_string()
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            file: default_motd_file(),
        }
    }
}
