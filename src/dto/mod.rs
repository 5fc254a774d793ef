//! DTO modules that bridge services with templates.

pub mod accounts;
pub mod lists;
pub mod orders;
pub mod products;
pub mod reports;
