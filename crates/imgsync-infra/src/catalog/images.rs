//! Port implementations for image upload, batched removal, and projection
//! reads against the catalog API.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::json;

use imgsync_core::image::ProductProjection;
use imgsync_core::ports::{
    CatalogImageReaderPort, CatalogImageWriterPort, CatalogReadError, ImageRemoval, ImageUpload,
    RemoveImagesError, UploadError,
};

use super::client::CatalogClient;

/// Content types the catalog accepts; anything else is sent as jpeg.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpeg", "png", "gif"];

fn content_type_for(extension: &str) -> String {
    if SUPPORTED_EXTENSIONS.contains(&extension) {
        format!("image/{extension}")
    } else {
        "image/jpeg".to_string()
    }
}

#[async_trait]
impl CatalogImageWriterPort for CatalogClient {
    async fn upload(&self, product_id: &str, image: ImageUpload) -> Result<(), UploadError> {
        let token = self
            .access_token()
            .await
            .map_err(|err| UploadError::Transport {
                filename: image.filename.clone(),
                message: err.to_string(),
            })?;

        let variant = image.variant_id.to_string();
        let response = self
            .http
            .post(format!("{}/images", self.products_url(product_id)))
            .bearer_auth(token)
            .query(&[
                ("filename", image.filename.as_str()),
                ("variant", variant.as_str()),
                ("staged", "false"),
            ])
            .header(CONTENT_TYPE, content_type_for(&image.extension))
            .body(image.bytes.clone())
            .send()
            .await
            .map_err(|err| UploadError::Transport {
                filename: image.filename.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            info!(
                "uploaded {}.{} to product {} variant {}",
                image.filename, image.extension, product_id, image.variant_id
            );
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(UploadError::Rejected {
            filename: image.filename,
            message: format!("status {status}: {message}"),
        })
    }

    async fn remove_images(
        &self,
        product_id: &str,
        version: u64,
        removals: Vec<ImageRemoval>,
    ) -> Result<(), RemoveImagesError> {
        let token = self
            .access_token()
            .await
            .map_err(|err| RemoveImagesError::Api(err.to_string()))?;

        let actions: Vec<_> = removals
            .iter()
            .map(|removal| {
                json!({
                    "action": "removeImage",
                    "imageUrl": removal.image_url,
                    "variantId": removal.variant_id,
                    "staged": false,
                })
            })
            .collect();
        debug!(
            "removing {} images from product {product_id} at version {version}",
            actions.len()
        );

        let response = self
            .http
            .post(self.products_url(product_id))
            .bearer_auth(token)
            .json(&json!({ "version": version, "actions": actions }))
            .send()
            .await
            .map_err(|err| RemoveImagesError::Api(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(RemoveImagesError::Conflict { version }),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(RemoveImagesError::Api(format!("status {status}: {message}")))
            }
        }
    }
}

#[async_trait]
impl CatalogImageReaderPort for CatalogClient {
    async fn product_projection(
        &self,
        product_id: &str,
    ) -> Result<ProductProjection, CatalogReadError> {
        let token = self
            .access_token()
            .await
            .map_err(|err| CatalogReadError::Api(err.to_string()))?;

        let response = self
            .http
            .get(self.product_projections_url(product_id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| CatalogReadError::Api(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogReadError::NotFound(product_id.to_string())),
            status if status.is_success() => response
                .json()
                .await
                .map_err(|err| CatalogReadError::Api(err.to_string())),
            status => Err(CatalogReadError::Api(format!("status {status}"))),
        }
    }
}
