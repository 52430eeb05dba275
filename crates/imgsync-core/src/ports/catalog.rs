use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use super::errors::{CatalogReadError, RemoveImagesError, UploadError};
use crate::image::ProductProjection;

/// One image upload: the fetched bytes plus the identity the catalog files
/// them under.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub filename: String,
    pub extension: String,
    pub variant_id: i64,
}

/// One entry of the batched removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRemoval {
    pub variant_id: i64,
    pub image_url: String,
}

/// Writes image state to the catalog.
#[async_trait]
pub trait CatalogImageWriterPort: Send + Sync {
    /// Uploads one image. Outcomes are independent per image.
    async fn upload(&self, product_id: &str, image: ImageUpload) -> Result<(), UploadError>;

    /// Issues the removal batch as a single atomic request against the
    /// current entity `version`. A stale version fails the whole batch with
    /// [`RemoveImagesError::Conflict`].
    async fn remove_images(
        &self,
        product_id: &str,
        version: u64,
        removals: Vec<ImageRemoval>,
    ) -> Result<(), RemoveImagesError>;
}

/// Reads product state from the catalog, for notifications that carry only
/// a product reference instead of the full projection.
#[async_trait]
pub trait CatalogImageReaderPort: Send + Sync {
    async fn product_projection(
        &self,
        product_id: &str,
    ) -> Result<ProductProjection, CatalogReadError>;
}

#[async_trait]
impl<T: CatalogImageWriterPort + ?Sized> CatalogImageWriterPort for Arc<T> {
    async fn upload(&self, product_id: &str, image: ImageUpload) -> Result<(), UploadError> {
        (**self).upload(product_id, image).await
    }

    async fn remove_images(
        &self,
        product_id: &str,
        version: u64,
        removals: Vec<ImageRemoval>,
    ) -> Result<(), RemoveImagesError> {
        (**self).remove_images(product_id, version, removals).await
    }
}

#[async_trait]
impl<T: CatalogImageReaderPort + ?Sized> CatalogImageReaderPort for Arc<T> {
    async fn product_projection(
        &self,
        product_id: &str,
    ) -> Result<ProductProjection, CatalogReadError> {
        (**self).product_projection(product_id).await
    }
}
