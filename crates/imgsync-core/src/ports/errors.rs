use thiserror::Error;

/// Failure downloading one source-feed image. Always isolated to that
/// image; never aborts the pass.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http status {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },
}

/// Failure uploading one image to the catalog. Isolated per image.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("catalog rejected image {filename}: {message}")]
    Rejected { filename: String, message: String },

    #[error("transport error uploading {filename}: {message}")]
    Transport { filename: String, message: String },
}

/// Failure of the batched image removal request.
#[derive(Debug, Error)]
pub enum RemoveImagesError {
    /// The catalog entity moved on; the whole batch is rejected.
    #[error("stale product version {version}")]
    Conflict { version: u64 },

    #[error("catalog api error: {0}")]
    Api(String),
}

/// Failure reading a product projection from the catalog.
#[derive(Debug, Error)]
pub enum CatalogReadError {
    #[error("product {0} not found")]
    NotFound(String),

    #[error("catalog api error: {0}")]
    Api(String),
}
