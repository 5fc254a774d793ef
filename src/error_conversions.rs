//! Error conversion glue between the domain and the layers around it.
//!
//! The domain layer does not know about remote or service errors; the
//! conversions live here so that `?` works at the boundaries.

use crate::domain::types::TypeConstraintError;
use crate::remote::errors::FetchError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

/// A constrained value rejected while decoding a response.
impl From<TypeConstraintError> for FetchError {
    fn from(val: TypeConstraintError) -> Self {
        FetchError::Parse(val.to_string())
    }
}
