//! # imgsync-app
//!
//! Application layer for product image synchronization: use cases that
//! drive the core domain through the ports, independent of any concrete
//! transport or HTTP client.

pub mod use_cases;

pub use use_cases::reconcile_product_images::{ProductPublished, ReconcileProductImages};
