//! Service configuration
//!
//! Configuration comes from three layers, later ones winning:
//! defaults, an optional JSON config file, environment variables
//! (`REPAIRDESK_HOST`, `REPAIRDESK_PORT`, `REPAIRDESK_CORS_ORIGINS`,
//! `DATABASE_URL`).

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors; all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8050)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// SQLite database URL (default: "sqlite://repairdesk.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound on pooled connections (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_database_url() -> String {
    "sqlite://repairdesk.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration: defaults, then the config file if given, then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a JSON config file; absent keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("REPAIRDESK_HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("REPAIRDESK_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::Env {
                var: "REPAIRDESK_PORT",
                value: port,
            })?;
        }
        if let Ok(origins) = env::var("REPAIRDESK_CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database_url = url;
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8050);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.database_url, "sqlite://repairdesk.db");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let parsed: ServiceConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(parsed.port, 9000);
        assert_eq!(parsed.host, "0.0.0.0");
        assert_eq!(parsed.max_connections, 5);
    }

    #[test]
    fn test_missing_file_reported() {
        let err = ServiceConfig::from_file(Path::new("/nonexistent/repairdesk.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
