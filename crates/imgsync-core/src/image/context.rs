use super::image_ref::{DeclaredImage, ImageRef};
use super::name::NamingConvention;
use super::product::{ProductProjection, VariantData};
use super::variant::{VariantImageState, VariantSource};

/// Aggregate image state for one product: the primary variant first, then
/// every secondary variant in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImageContext {
    pub product_id: String,
    pub variants: Vec<VariantImageState>,
}

impl ProductImageContext {
    /// Builds the per-variant view from a raw projection.
    ///
    /// Every variant is processed regardless of whether any configured image
    /// attribute is present on it. Pure transformation, no side effects.
    pub fn build(projection: &ProductProjection, image_attributes: &[String]) -> Self {
        let mut variants = Vec::with_capacity(1 + projection.variants.len());
        variants.push(build_variant(
            &projection.master_variant,
            VariantSource::Primary,
            image_attributes,
        ));
        for variant in &projection.variants {
            variants.push(build_variant(
                variant,
                VariantSource::Secondary,
                image_attributes,
            ));
        }
        Self {
            product_id: projection.id.clone(),
            variants,
        }
    }
}

fn build_variant(
    variant: &VariantData,
    source: VariantSource,
    image_attributes: &[String],
) -> VariantImageState {
    let attached = variant
        .images
        .iter()
        .map(|img| ImageRef::from_url(&img.url, NamingConvention::Catalog))
        .collect();

    let mut declared = Vec::new();
    for attr in &variant.attributes {
        if !image_attributes.iter().any(|name| name == &attr.name) {
            continue;
        }
        // Only single string values declare an image; lists, objects and
        // numbers are skipped silently.
        let Some(url) = attr.value.as_str() else {
            continue;
        };
        declared.push(DeclaredImage {
            image: ImageRef::from_url(url, NamingConvention::SourceFeed),
            attribute_name: attr.name.clone(),
        });
    }

    VariantImageState {
        variant_id: variant.id,
        source,
        attached,
        declared,
    }
}
