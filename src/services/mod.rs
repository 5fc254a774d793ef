//! Services backing the dashboard routes.
//!
//! Services take the shop API collaborators as trait objects or generics so
//! that they can be exercised with the mocks in `remote::mock`.

use thiserror::Error;

use crate::forms::FormError;
use crate::remote::errors::FetchError;

pub mod accounts;
pub mod catalog;
pub mod lists;
pub mod orders;
pub mod products;
pub mod reports;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Remote(#[from] FetchError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
