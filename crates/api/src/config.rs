use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Default MongoDB database name.
const DEFAULT_MONGODB_DATABASE: &str = "playlists";

/// Which store backend to start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB reached through a connection string.
    Mongo { uri: String, database: String },
    /// Process-local store; contents are lost on exit.
    Memory,
}

/// A configuration value that is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the MongoDB connection string has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Store backend and its connection settings.
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `mongo`                    |
    /// | `MONGODB_URI`          | required for `mongo`       |
    /// | `MONGODB_DATABASE`     | `playlists`                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host_raw = var("HOST", "0.0.0.0");
        let host: IpAddr = host_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "HOST",
            expected: "IP address",
            value: host_raw.clone(),
        })?;

        let port_raw = var("PORT", "3000");
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "PORT",
            expected: "u16",
            value: port_raw.clone(),
        })?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "origin",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let timeout_raw = var("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs: u64 = timeout_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "REQUEST_TIMEOUT_SECS",
            expected: "u64",
            value: timeout_raw.clone(),
        })?;

        let store = match var("STORE_BACKEND", "mongo").to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => StoreBackend::Mongo {
                uri: lookup("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?,
                database: var("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND",
                    expected: "backend (mongo, memory)",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
