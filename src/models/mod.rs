//! Runtime configuration of the dashboard server.

pub mod config;
