use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, error};

use imgsync_core::ports::{FetchError, ImageFetcherPort};

/// Downloads source-feed images over plain HTTP GET.
///
/// No retries here; a failed download is reported back to the orchestrator
/// and isolated to that image.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcherPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        debug!("downloading image from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("image download from {url} failed with status {status}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|err| FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        debug!("downloaded {} bytes from {url}", bytes.len());
        Ok(bytes)
    }
}
