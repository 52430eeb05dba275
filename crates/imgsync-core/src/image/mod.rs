//! Product image domain: normalized image identities, per-variant state,
//! and the diff that reconciles attached images against declared ones.

mod context;
mod diff;
mod image_ref;
mod name;
mod product;
mod result;
mod variant;

pub use context::ProductImageContext;
pub use diff::SyncDiff;
pub use image_ref::{DeclaredImage, ImageRef};
pub use name::{parse_image_name, ImageName, NamingConvention};
pub use product::{ProductProjection, VariantAttribute, VariantData, VariantImage};
pub use result::{FailedImage, ReconciliationResult, RemovalOutcome, UploadedImage};
pub use variant::{VariantImageState, VariantSource};

#[cfg(test)]
mod tests;
