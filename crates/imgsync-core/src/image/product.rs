//! Serde model of the product projection carried by publish notifications.
//!
//! Attribute values stay dynamic (`serde_json::Value`) on purpose: only
//! single-string values declare an image, and the builder applies that
//! type guard explicitly rather than coercing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    pub id: String,
    pub version: u64,
    pub master_variant: VariantData,
    #[serde(default)]
    pub variants: Vec<VariantData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantData {
    pub id: i64,
    #[serde(default)]
    pub images: Vec<VariantImage>,
    #[serde(default)]
    pub attributes: Vec<VariantAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAttribute {
    pub name: String,
    pub value: Value,
}
