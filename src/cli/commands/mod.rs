//! CLI command implementations.

pub mod organize;
pub mod scrape;
