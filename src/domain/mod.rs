//! Domain types shared by the list-view core and the dashboard.

pub mod account;
pub mod catalog;
pub mod list;
pub mod order;
pub mod product;
pub mod report;
pub mod types;

mod de;
