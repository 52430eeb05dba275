//! Use case implementations.

pub mod reconcile_product_images;
