//! # imgsync-infra
//!
//! Infrastructure adapters behind the core ports: the reqwest-based image
//! downloader, the catalog API client, and environment configuration.

pub mod catalog;
pub mod config;
pub mod http;

pub use catalog::CatalogClient;
pub use config::{AppConfig, CatalogCredentials, ConfigError};
pub use http::HttpImageFetcher;
