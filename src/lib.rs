//! Music Video Organizer Library
//!
//! Reconciles local music video files against IMVDB and YouTube, then renames,
//! relocates and annotates them with Kodi-style NFO sidecars.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
