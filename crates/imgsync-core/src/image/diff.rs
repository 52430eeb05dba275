use std::collections::HashSet;

use super::image_ref::{DeclaredImage, ImageRef};
use super::variant::VariantImageState;

/// The minimal add/remove sets that reconcile one variant's attached images
/// with its declared ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDiff {
    pub variant_id: i64,
    /// Declared images with no matching attached image, declared order.
    pub to_add: Vec<DeclaredImage>,
    /// Attached images with no matching declared image, attached order.
    pub to_remove: Vec<ImageRef>,
}

impl SyncDiff {
    /// Computes the diff for one variant. Pure and deterministic.
    ///
    /// An image whose identity key appears on both sides is left untouched.
    /// Declared images colliding on the same key are kept independently:
    /// they represent distinct attribute sources pointing at same-named
    /// content and are not deduplicated here.
    pub fn compute(variant: &VariantImageState) -> Self {
        let attached_keys: HashSet<String> =
            variant.attached.iter().map(ImageRef::identity_key).collect();
        let declared_keys: HashSet<String> = variant
            .declared
            .iter()
            .map(DeclaredImage::identity_key)
            .collect();

        let to_add = variant
            .declared
            .iter()
            .filter(|declared| !attached_keys.contains(&declared.identity_key()))
            .cloned()
            .collect();

        let to_remove = variant
            .attached
            .iter()
            .filter(|attached| !declared_keys.contains(&attached.identity_key()))
            .cloned()
            .collect();

        Self {
            variant_id: variant.variant_id,
            to_add,
            to_remove,
        }
    }
}
