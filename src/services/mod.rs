//! Request-handling logic kept free of HTTP types so it can be exercised
//! against any repository implementation.

pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod analytics;
pub mod products;
pub mod report;
