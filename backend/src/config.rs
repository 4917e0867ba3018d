//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Cross-origin configuration
    pub cors: CorsConfig,
    /// Deployment mode, controls error detail exposure
    pub environment: Environment,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string or file path
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Cross-origin configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Single origin allowed to call the API. `None` allows every origin.
    pub allowed_origin: Option<String>,
}

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Server errors include their detail in the response body
    #[default]
    Development,
    /// Server errors are reported with a generic message
    Production,
}

impl Environment {
    /// Parse an environment name; anything other than "production" is development
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Whether server error detail should be hidden from clients
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:noteful.db".to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
            cors: CorsConfig {
                allowed_origin: env::var("ALLOWED_ORIGIN")
                    .ok()
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty()),
            },
            environment: env::var("APP_ENV")
                .map(|e| Environment::parse(&e))
                .unwrap_or_default(),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
