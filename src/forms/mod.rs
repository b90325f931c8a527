//! Request bodies accepted by the JSON endpoints.

pub mod products;
