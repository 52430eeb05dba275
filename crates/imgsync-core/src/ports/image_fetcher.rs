use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use super::errors::FetchError;

/// Downloads image bytes from a source-feed URL.
///
/// Implementations must not retry beyond what their own transport defines;
/// the orchestrator never retries.
#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

#[async_trait]
impl<T: ImageFetcherPort + ?Sized> ImageFetcherPort for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        (**self).fetch(url).await
    }
}
