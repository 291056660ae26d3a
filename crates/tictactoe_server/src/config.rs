//! Server configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, the `PORT` environment variable, then CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable consulted for the listen port.
pub const PORT_ENV: &str = "PORT";

/// Static file server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind to.
    host: String,

    /// Port to listen on.
    port: u16,

    /// Directory the browser UI is served from.
    static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: default_static_dir(),
        }
    }
}

/// Bundled browser UI shipped with this crate.
fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Overrides `host`.
    pub host: Option<String>,
    /// Overrides `port`.
    pub port: Option<u16>,
    /// Overrides `static_dir`.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Loads the full configuration stack.
    #[instrument(skip(overrides))]
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.with_port_env(std::env::var(PORT_ENV).ok().as_deref())?;
        let config = config.with_overrides(overrides);

        info!(
            host = %config.host,
            port = config.port,
            static_dir = %config.static_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies the value of the `PORT` environment variable, if set.
    pub fn with_port_env(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            self.port = value.trim().parse().map_err(|_| {
                ConfigError::new(format!("{} is not a valid port: {:?}", PORT_ENV, value))
            })?;
            debug!(port = self.port, "Port taken from environment");
        }
        Ok(self)
    }

    /// Applies explicit command-line values.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 8080);
        assert!(config.static_dir().ends_with("static"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 9000\n").unwrap();
        assert_eq!(*config.port(), 9000);
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ServerConfig::from_toml_str("prot = 9000\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_port_env_layer() {
        let config = ServerConfig::default().with_port_env(Some("3001")).unwrap();
        assert_eq!(*config.port(), 3001);

        let unchanged = ServerConfig::default().with_port_env(None).unwrap();
        assert_eq!(*unchanged.port(), 8080);

        assert!(ServerConfig::default().with_port_env(Some("eighty")).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = ServerConfig::from_toml_str("host = \"0.0.0.0\"\nport = 9000\n")
            .unwrap()
            .with_port_env(Some("9100"))
            .unwrap()
            .with_overrides(ConfigOverrides {
                port: Some(9200),
                static_dir: Some(PathBuf::from("/srv/www")),
                ..Default::default()
            });
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 9200);
        assert_eq!(config.static_dir(), Path::new("/srv/www"));
    }

    #[test]
    fn test_example_file_parses() {
        let config =
            ServerConfig::from_toml_str(include_str!("../tictactoe.example.toml")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
