//! Shared builders for image domain tests.

use serde_json::{json, Value};

use crate::image::*;

pub fn attached(url: &str) -> ImageRef {
    ImageRef::from_url(url, NamingConvention::Catalog)
}

pub fn declared(url: &str, attribute_name: &str) -> DeclaredImage {
    DeclaredImage {
        image: ImageRef::from_url(url, NamingConvention::SourceFeed),
        attribute_name: attribute_name.to_string(),
    }
}

pub fn variant_state(
    variant_id: i64,
    attached: Vec<ImageRef>,
    declared: Vec<DeclaredImage>,
) -> VariantImageState {
    VariantImageState {
        variant_id,
        source: VariantSource::Primary,
        attached,
        declared,
    }
}

pub fn attribute(name: &str, value: Value) -> VariantAttribute {
    VariantAttribute {
        name: name.to_string(),
        value,
    }
}

pub fn variant_data(
    id: i64,
    image_urls: &[&str],
    attributes: Vec<VariantAttribute>,
) -> VariantData {
    VariantData {
        id,
        images: image_urls
            .iter()
            .map(|url| VariantImage {
                url: (*url).to_string(),
            })
            .collect(),
        attributes,
    }
}

pub fn projection(
    id: &str,
    version: u64,
    master_variant: VariantData,
    variants: Vec<VariantData>,
) -> ProductProjection {
    ProductProjection {
        id: id.to_string(),
        version,
        master_variant,
        variants,
    }
}

/// A projection in the wire shape the catalog publishes.
pub fn sample_projection_json() -> Value {
    json!({
        "id": "prod-1",
        "version": 7,
        "masterVariant": {
            "id": 1,
            "images": [
                { "url": "https://cdn.catalog.example/prod-1/Brake_Pad-AB12CD34.png" }
            ],
            "attributes": [
                { "name": "image_1", "value": "https://cdn.feed.example/pads/Brake_Pad.png" },
                { "name": "image_2", "value": "https://cdn.feed.example/pads/Brake_Disc.jpg" }
            ]
        },
        "variants": [
            {
                "id": 2,
                "images": [],
                "attributes": [
                    { "name": "image_1", "value": "https://cdn.feed.example/pads/Caliper.jpg" }
                ]
            }
        ]
    })
}
