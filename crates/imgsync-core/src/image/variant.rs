use serde::{Deserialize, Serialize};

use super::image_ref::{DeclaredImage, ImageRef};

/// Whether a variant is the product's canonical one or an additional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantSource {
    Primary,
    Secondary,
}

/// Per-variant view of current vs desired image state.
///
/// Built fresh on every reconciliation pass and discarded after diffing;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantImageState {
    pub variant_id: i64,
    pub source: VariantSource,
    /// Images currently stored on the catalog entry, input order preserved.
    pub attached: Vec<ImageRef>,
    /// Images named by configured attributes, attribute-scan order preserved.
    pub declared: Vec<DeclaredImage>,
}
