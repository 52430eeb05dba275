//! Service wiring for the product image sync connector: the warp event
//! endpoint and its composition with the infra adapters.

pub mod web;
