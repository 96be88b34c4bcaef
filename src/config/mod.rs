// Configuration module entry point
// One shared configuration file serves every exercise binary

mod types;

use std::net::SocketAddr;

pub use types::{Config, LoggingConfig, MotdConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.toml` file.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file path (without extension).
    ///
    /// The file is optional: every key has a built-in default, and the
    /// `SERVER_HOST`, `SERVER_PORT`, and `SERVER_WORKERS` environment
    /// variables override both file values and defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("motd.file", "data/motd.txt")?;

        // An env source without a separator cannot address nested keys, so
        // the server overrides are mapped explicitly.
        for (var, key) in [
            ("SERVER_HOST", "server.host"),
            ("SERVER_PORT", "server.port"),
            ("SERVER_WORKERS", "server.workers"),
        ] {
            if let Ok(value) = std::env::var(var) {
                settings = settings.set_override(key, value)?;
            }
        }

        settings.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                workers: None,
            },
            logging: LoggingConfig {
                access_log: true,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            motd: MotdConfig::default(),
        }
    }

    #[test]
    fn socket_addr_parses_host_and_port() {
        let cfg = make_config("127.0.0.1", 5000);
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let cfg = make_config("not a host", 5000);
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn motd_config_defaults_to_data_file() {
        assert_eq!(MotdConfig::default().file, "data/motd.txt");
    }

    // Single test because the process environment is shared across threads
    #[test]
    fn env_variables_override_server_section() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.server.workers.is_none());

        std::env::set_var("SERVER_PORT", "9999");
        std::env::set_var("SERVER_HOST", "127.0.0.1");
        let cfg = Config::load_from("no-such-config-file").unwrap();
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("SERVER_HOST");

        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.server.host, "127.0.0.1");
    }
}
