pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod indicators;
pub mod pagination;
pub mod query;
pub mod stats;
pub mod viewport;
