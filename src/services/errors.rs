use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found. Carries the message shown to clients.
    #[error("{0}")]
    NotFound(&'static str),
    /// A stock reduction asked for more units than are on hand.
    #[error("Insufficient stock")]
    InsufficientStock,
    /// A stock change would leave a quantity the stock column cannot hold.
    #[error("Stock quantity out of range")]
    StockOutOfRange,
    /// An unexpected internal error occurred.
    #[error("Internal server error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const NO_PRODUCTS_FOUND: &str = "No products found";
