//! Configuration management for Filelink Server

use std::env;

use crate::links::{BaseUrl, HashLength, LinkError};

/// Configuration errors; all of them abort startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("Invalid worker URL: {0}")]
    WorkerUrl(#[from] LinkError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub links: LinkConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Address of the link-resolving worker
    pub worker_base_url: BaseUrl,
    pub hash_length: HashLength,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let worker_url = lookup("WORKER_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("WORKER_URL"))?;

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        // Unparseable values get the same treatment as out-of-range ones
        let hash_length = lookup("HASH_LENGTH")
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(HashLength::new)
            .unwrap_or_default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:./filelink.db".to_string()),
            },
            links: LinkConfig {
                worker_base_url: BaseUrl::parse(&worker_url)?,
                hash_length,
            },
        })
    }
}
