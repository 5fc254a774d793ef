//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod catalog;
pub mod lists;
pub mod orders;
pub mod reports;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid payment status")]
    InvalidStatus,

    #[error("invalid time range")]
    InvalidTimeRange,

    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("start date must not be after end date")]
    InvalidDateWindow,
}
