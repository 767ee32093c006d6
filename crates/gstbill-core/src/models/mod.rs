//! Data models: extracted records, tax breakdown and configuration.

pub mod config;
pub mod record;
