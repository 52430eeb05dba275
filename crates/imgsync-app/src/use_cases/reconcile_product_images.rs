//! ReconcileProductImages use case - converges a product's attached catalog
//! images onto the state declared by its marketplace-feed attributes.

use std::sync::Arc;

use anyhow::{bail, Result};
use bytes::Bytes;
use futures::future::join_all;
use log::{debug, info, warn};

use imgsync_core::image::{
    FailedImage, ProductImageContext, ProductProjection, ReconciliationResult, RemovalOutcome,
    SyncDiff, UploadedImage,
};
use imgsync_core::ports::{
    CatalogImageWriterPort, ImageFetcherPort, ImageRemoval, ImageUpload,
};

/// A decoded product-published notification.
#[derive(Debug, Clone)]
pub struct ProductPublished {
    pub projection: ProductProjection,
}

/// A missing image queued for download, tagged with its owning variant.
struct TrackedImage {
    url: String,
    filename: String,
    extension: String,
    variant_id: i64,
}

/// ReconcileProductImages use case.
///
/// One instance serves many passes; every pass builds its own context and
/// shares no mutable state with concurrent passes.
pub struct ReconcileProductImages<F, W>
where
    F: ImageFetcherPort,
    W: CatalogImageWriterPort,
{
    image_attributes: Vec<String>,
    fetcher: Arc<F>,
    writer: Arc<W>,
}

impl<F, W> ReconcileProductImages<F, W>
where
    F: ImageFetcherPort,
    W: CatalogImageWriterPort,
{
    pub fn new(image_attributes: Vec<String>, fetcher: Arc<F>, writer: Arc<W>) -> Self {
        Self {
            image_attributes,
            fetcher,
            writer,
        }
    }

    /// Runs one reconciliation pass.
    ///
    /// Per-image failures never abort the pass; they fold into the result.
    /// Only a missing product id rejects the pass outright.
    pub async fn run(&self, event: ProductPublished) -> Result<ReconciliationResult> {
        let projection = &event.projection;
        if projection.id.is_empty() {
            bail!("product projection has no id");
        }

        if self.image_attributes.is_empty() {
            debug!(
                "no image attributes configured, skipping product {}",
                projection.id
            );
            return Ok(ReconciliationResult::empty());
        }

        let context = ProductImageContext::build(projection, &self.image_attributes);

        let mut to_download: Vec<TrackedImage> = Vec::new();
        let mut removals: Vec<ImageRemoval> = Vec::new();
        for variant in &context.variants {
            let diff = SyncDiff::compute(variant);
            info!(
                "product {} variant {}: {} to upload, {} to remove",
                context.product_id,
                diff.variant_id,
                diff.to_add.len(),
                diff.to_remove.len()
            );

            let variant_id = diff.variant_id;
            for img in diff.to_add {
                to_download.push(TrackedImage {
                    url: img.image.url,
                    filename: img.image.filename,
                    extension: img.image.extension,
                    variant_id,
                });
            }
            for img in diff.to_remove {
                removals.push(ImageRemoval {
                    variant_id,
                    image_url: img.url,
                });
            }
        }

        let removal_outcome = self
            .remove_stale(&context.product_id, projection.version, removals)
            .await;

        let (fetched, mut failed) = self.fetch_all(to_download).await;
        let (succeeded, upload_failures) = self.upload_all(&context.product_id, fetched).await;
        failed.extend(upload_failures);

        Ok(ReconciliationResult {
            removal_outcome,
            succeeded,
            failed,
        })
    }

    /// Issues the removal batch once against the event's entity version.
    /// A conflict or api error fails only this step; the pass continues.
    async fn remove_stale(
        &self,
        product_id: &str,
        version: u64,
        removals: Vec<ImageRemoval>,
    ) -> RemovalOutcome {
        if removals.is_empty() {
            return RemovalOutcome::Success;
        }
        match self
            .writer
            .remove_images(product_id, version, removals)
            .await
        {
            Ok(()) => RemovalOutcome::Success,
            Err(err) => {
                warn!("image removal failed for product {product_id}: {err}");
                RemovalOutcome::Failed
            }
        }
    }

    /// Downloads every queued image concurrently and waits for all of them
    /// to settle. A failing fetch is recorded and excluded from the upload
    /// step; it does not abort the others.
    async fn fetch_all(
        &self,
        images: Vec<TrackedImage>,
    ) -> (Vec<(TrackedImage, Bytes)>, Vec<FailedImage>) {
        let settled = join_all(images.into_iter().map(|img| async move {
            let outcome = self.fetcher.fetch(&img.url).await;
            (img, outcome)
        }))
        .await;

        let mut fetched = Vec::new();
        let mut failed = Vec::new();
        for (img, outcome) in settled {
            match outcome {
                Ok(bytes) => fetched.push((img, bytes)),
                Err(err) => {
                    warn!("download of {} failed: {err}", img.url);
                    failed.push(FailedImage {
                        variant_id: img.variant_id,
                        url: img.url,
                        error: err.to_string(),
                    });
                }
            }
        }
        (fetched, failed)
    }

    /// Uploads every fetched image concurrently, waiting for all to settle
    /// and collecting outcomes independently per image.
    async fn upload_all(
        &self,
        product_id: &str,
        images: Vec<(TrackedImage, Bytes)>,
    ) -> (Vec<UploadedImage>, Vec<FailedImage>) {
        let settled = join_all(images.into_iter().map(|(img, bytes)| async move {
            let upload = ImageUpload {
                bytes,
                filename: img.filename.clone(),
                extension: img.extension.clone(),
                variant_id: img.variant_id,
            };
            let outcome = self.writer.upload(product_id, upload).await;
            (img, outcome)
        }))
        .await;

        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (img, outcome) in settled {
            match outcome {
                Ok(()) => succeeded.push(UploadedImage {
                    variant_id: img.variant_id,
                    url: img.url,
                }),
                Err(err) => {
                    warn!("upload of {} failed: {err}", img.url);
                    failed.push(FailedImage {
                        variant_id: img.variant_id,
                        url: img.url,
                        error: err.to_string(),
                    });
                }
            }
        }
        (succeeded, failed)
    }
}
