//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Music Video Organizer - Organize music videos with IMVDB and YouTube
#[derive(Parser, Debug)]
#[command(name = "music-video-organizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic output
    #[arg(short, long, global = true, visible_alias = "debug")]
    pub verbose: bool,

    /// Invoke yt-dlp as `.\yt-dlp` (Windows)
    #[arg(long, global = true)]
    pub win: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Organize a directory of music videos
    Organize {
        /// Source directory, scanned recursively
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Library root for organized videos
        #[arg(short, long, value_name = "DIR")]
        target: PathBuf,

        /// Tolerate scene-release names, dots and other separators
        #[arg(long)]
        oddities: bool,
    },

    /// Download every video of an IMVDB artist
    Artist {
        /// IMVDB artist slug
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Library root for downloaded videos
        #[arg(short, long, value_name = "DIR")]
        target: PathBuf,
    },

    /// Download every video of an IMVDB director
    Director {
        /// IMVDB director slug
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Library root for downloaded videos
        #[arg(short, long, value_name = "DIR")]
        target: PathBuf,
    },
}
