use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. A single `"*"` entry allows any origin.
    pub allowed_origins: Vec<String>,
    /// Debug mode raises the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// How long in-flight requests may keep running after a shutdown signal.
    pub shutdown_grace_secs: u64,
    pub request_timeout_secs: u64,
}

impl ServerSettings {
    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Database connection pool configuration. Durations are in seconds.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub database_url: String,
}

impl AppSettings {
    /// Default `tracing` filter directive, used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> String {
        let level = if self.api.debug {
            "debug"
        } else {
            self.logging.level.as_str()
        };
        format!("api={level},common_services={level},tower_http={level}")
    }

    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.api.allowed_origins.iter().any(|origin| origin == "*")
    }
}
