// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    resources: Vec<String>,
    repository_priority: i32,
    route_keys: Vec<String>,
    slugifier: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://waypost.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_resources() -> Vec<String> {
    vec!["repository".into()]
}

fn default_repository_priority() -> i32 {
    100
}

fn default_route_keys() -> Vec<String> {
    vec!["page".into()]
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let resources = env::var("WAYPOST_RESOURCES")
            .ok()
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_resources);

        let repository_priority = match env::var("WAYPOST_REPOSITORY_PRIORITY") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "WAYPOST_REPOSITORY_PRIORITY must be an integer, got '{raw}'"
                ))
            })?,
            Err(_) => default_repository_priority(),
        };

        let route_keys = env::var("WAYPOST_ROUTE_KEYS")
            .ok()
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_route_keys);

        let slugifier = env::var("WAYPOST_SLUGIFIER").unwrap_or_else(|_| "default".into());

        Ok(Self {
            database_url,
            listen_addr,
            resources,
            repository_priority,
            route_keys,
            slugifier,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Deferred resource names registered with the directory, in order.
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn repository_priority(&self) -> i32 {
        self.repository_priority
    }

    /// Resource keys the content routes try to match, in order.
    pub fn route_keys(&self) -> &[String] {
        &self.route_keys
    }

    pub fn slugifier(&self) -> &str {
        &self.slugifier
    }
}
