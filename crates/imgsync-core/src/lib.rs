//! # imgsync-core
//!
//! Core domain model and business logic for product image synchronization.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the URL name parser, the variant context builder, the sync
//! diff calculator, and the port traits the application layer drives I/O
//! through.

// Public module exports
pub mod image;
pub mod ports;

// Re-export commonly used types at the crate root
pub use image::{
    DeclaredImage, ImageRef, NamingConvention, ProductImageContext, ProductProjection,
    ReconciliationResult, RemovalOutcome, SyncDiff, VariantImageState, VariantSource,
};
