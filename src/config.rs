// Server configuration, read from FLIGHT_TRACKER_* environment variables
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const ENV_PREFIX: &str = "FLIGHT_TRACKER_";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
    // Upper bound on segments per request; also bounds traversal stack size
    pub max_flights: usize,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 10,
            shutdown_timeout_secs: 60,
            max_flights: 1024,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by any `FLIGHT_TRACKER_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or(&get, "PORT", defaults.port)?,
            request_timeout_secs: parse_or(
                &get,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            shutdown_timeout_secs: parse_or(
                &get,
                "SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout_secs,
            )?,
            max_flights: parse_or(&get, "MAX_FLIGHTS", defaults.max_flights)?,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn parse_or<T, G>(get: &G, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: format!("{ENV_PREFIX}{name}"),
            value,
        }),
        None => Ok(default),
    }
}
