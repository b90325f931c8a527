//! Diesel row types and runtime configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
