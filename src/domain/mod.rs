//! Domain entities and value objects, independent of storage and HTTP.

pub mod analytics;
pub mod product;
pub mod types;
