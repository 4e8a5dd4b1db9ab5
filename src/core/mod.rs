//! Core business logic modules.

pub mod executor;
pub mod matcher;
pub mod organizer;
pub mod parser;
pub mod planner;
pub mod quality;
pub mod scanner;
pub mod scraper;
