//! Port interfaces between the reconciliation logic and infrastructure.
//!
//! Ports keep the core independent of the network layer: the image CDN and
//! the catalog API are reached only through these traits, implemented by
//! the infra crate and mocked in tests.

mod catalog;
pub mod errors;
mod image_fetcher;

pub use catalog::{CatalogImageReaderPort, CatalogImageWriterPort, ImageRemoval, ImageUpload};
pub use errors::{CatalogReadError, FetchError, RemoveImagesError, UploadError};
pub use image_fetcher::ImageFetcherPort;
