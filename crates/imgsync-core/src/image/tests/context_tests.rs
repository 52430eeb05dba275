//! Tests for [`ProductImageContext::build`].

use serde_json::json;

use super::fixtures::*;
use crate::image::*;

fn attrs(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[test]
fn primary_variant_comes_first_then_secondaries_in_input_order() {
    let product = projection(
        "prod-1",
        3,
        variant_data(1, &[], vec![]),
        vec![variant_data(5, &[], vec![]), variant_data(2, &[], vec![])],
    );

    let context = ProductImageContext::build(&product, &attrs(&["image_1"]));

    assert_eq!(context.product_id, "prod-1");
    let ids: Vec<i64> = context.variants.iter().map(|v| v.variant_id).collect();
    assert_eq!(ids, vec![1, 5, 2]);
    assert_eq!(context.variants[0].source, VariantSource::Primary);
    assert_eq!(context.variants[1].source, VariantSource::Secondary);
    assert_eq!(context.variants[2].source, VariantSource::Secondary);
}

#[test]
fn attached_images_use_catalog_convention() {
    let product = projection(
        "prod-1",
        1,
        variant_data(
            1,
            &["https://cdn.catalog.example/p/Brake_Pad-AB12CD34.png"],
            vec![],
        ),
        vec![],
    );

    let context = ProductImageContext::build(&product, &attrs(&["image_1"]));

    let attached = &context.variants[0].attached;
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].filename, "Brake_Pad");
    assert_eq!(attached[0].extension, "png");
    assert_eq!(
        attached[0].url,
        "https://cdn.catalog.example/p/Brake_Pad-AB12CD34.png"
    );
}

#[test]
fn declared_images_come_only_from_configured_attributes() {
    let product = projection(
        "prod-1",
        1,
        variant_data(
            1,
            &[],
            vec![
                attribute("image_1", json!("https://cdn.feed.example/a/Pad.jpg")),
                attribute("color", json!("https://cdn.feed.example/a/Nope.jpg")),
            ],
        ),
        vec![],
    );

    let context = ProductImageContext::build(&product, &attrs(&["image_1", "image_2"]));

    let declared = &context.variants[0].declared;
    assert_eq!(declared.len(), 1);
    assert_eq!(declared[0].attribute_name, "image_1");
    assert_eq!(declared[0].image.filename, "Pad");
    assert_eq!(declared[0].image.extension, "jpg");
}

#[test]
fn non_string_attribute_values_are_skipped_silently() {
    let product = projection(
        "prod-1",
        1,
        variant_data(
            1,
            &[],
            vec![
                attribute("image_1", json!(42)),
                attribute("image_2", json!(["https://cdn.feed.example/a/List.jpg"])),
                attribute("image_3", json!({"url": "https://cdn.feed.example/a/Obj.jpg"})),
                attribute("image_4", json!(null)),
                attribute("image_5", json!("https://cdn.feed.example/a/Real.jpg")),
            ],
        ),
        vec![],
    );

    let names = attrs(&["image_1", "image_2", "image_3", "image_4", "image_5"]);
    let context = ProductImageContext::build(&product, &names);

    let declared = &context.variants[0].declared;
    assert_eq!(declared.len(), 1);
    assert_eq!(declared[0].attribute_name, "image_5");
}

#[test]
fn declared_images_preserve_attribute_scan_order() {
    let product = projection(
        "prod-1",
        1,
        variant_data(
            1,
            &[],
            vec![
                attribute("image_2", json!("https://cdn.feed.example/a/Second.jpg")),
                attribute("image_1", json!("https://cdn.feed.example/a/First.jpg")),
            ],
        ),
        vec![],
    );

    let context = ProductImageContext::build(&product, &attrs(&["image_1", "image_2"]));

    let filenames: Vec<&str> = context.variants[0]
        .declared
        .iter()
        .map(|d| d.image.filename.as_str())
        .collect();
    assert_eq!(filenames, vec!["Second", "First"]);
}

#[test]
fn variants_without_configured_attributes_are_still_processed() {
    let product = projection(
        "prod-1",
        1,
        variant_data(1, &["https://cdn.catalog.example/p/Old-AB12CD34.png"], vec![]),
        vec![variant_data(2, &[], vec![])],
    );

    let context = ProductImageContext::build(&product, &attrs(&["image_1"]));

    assert_eq!(context.variants.len(), 2);
    assert_eq!(context.variants[0].attached.len(), 1);
    assert!(context.variants[0].declared.is_empty());
    assert!(context.variants[1].attached.is_empty());
}

#[test]
fn builds_from_wire_shaped_payload() {
    let product: ProductProjection = serde_json::from_value(sample_projection_json()).unwrap();
    let context = ProductImageContext::build(&product, &attrs(&["image_1", "image_2"]));

    assert_eq!(context.variants.len(), 2);
    assert_eq!(context.variants[0].attached[0].filename, "Brake_Pad");
    assert_eq!(context.variants[0].declared.len(), 2);
    assert_eq!(context.variants[1].declared[0].image.filename, "Caliper");
}
