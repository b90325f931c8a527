//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls bridging them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<crate::domain::product::StockError> for crate::services::ServiceError {
    fn from(val: crate::domain::product::StockError) -> Self {
        use crate::domain::product::StockError;
        use crate::services::ServiceError;

        match val {
            StockError::Insufficient { .. } => ServiceError::InsufficientStock,
            StockError::OutOfRange { .. } => ServiceError::StockOutOfRange,
        }
    }
}
