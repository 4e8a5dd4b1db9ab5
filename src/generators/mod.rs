//! Name and sidecar generators.

pub mod filename;
pub mod folder;
pub mod nfo;
