//! Opening-hours and cart pricing rules for the storefront, plus the small HTTP service
//! that exposes them.

pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod server;
pub mod timing;
