//! Environment-driven service configuration.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Credentials and endpoints for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogCredentials {
    pub api_url: String,
    pub auth_url: String,
    pub project_key: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogCredentials,
    /// Ordered list of attribute names considered image-bearing.
    pub image_attributes: Vec<String>,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// `IMAGE_ATTRIBUTES` is a comma-separated ordered list; an empty or
    /// absent value is valid and makes every pass a no-op.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog = CatalogCredentials {
            api_url: require("CTP_API_URL")?,
            auth_url: require("CTP_AUTH_URL")?,
            project_key: require("CTP_PROJECT_KEY")?,
            client_id: require("CTP_CLIENT_ID")?,
            client_secret: require("CTP_CLIENT_SECRET")?,
        };

        let image_attributes = std::env::var("IMAGE_ATTRIBUTES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("BIND_ADDR", raw))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        Ok(Self {
            catalog,
            image_attributes,
            bind_addr,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the process environment is touched from a single thread.
    #[test]
    fn from_env_reads_and_validates() {
        std::env::set_var("CTP_API_URL", "https://api.catalog.example");
        std::env::set_var("CTP_AUTH_URL", "https://auth.catalog.example");
        std::env::set_var("CTP_PROJECT_KEY", "proj");
        std::env::set_var("CTP_CLIENT_ID", "id");
        std::env::set_var("CTP_CLIENT_SECRET", "secret");
        std::env::set_var("IMAGE_ATTRIBUTES", " image_1, image_2 ,,image_3 ");
        std::env::remove_var("BIND_ADDR");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(
            config.image_attributes,
            vec!["image_1", "image_2", "image_3"]
        );
        assert_eq!(config.bind_addr.port(), 8080);

        std::env::set_var("BIND_ADDR", "not-an-addr");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Invalid("BIND_ADDR", _))
        ));
        std::env::remove_var("BIND_ADDR");

        std::env::remove_var("CTP_CLIENT_SECRET");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingVar("CTP_CLIENT_SECRET"))
        ));
    }
}
