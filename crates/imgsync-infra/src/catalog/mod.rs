//! Catalog API client: OAuth client-credentials auth plus the image
//! upload, image removal, and product-projection read endpoints.

mod client;
mod images;

pub use client::CatalogClient;
