//! Organize command implementation.

use crate::core::organizer::{Organizer, OrganizerConfig, RunSummary};
use crate::core::parser::ParseMode;
use crate::models::config::Config;
use crate::services::ffprobe::FfprobeInspector;
use crate::services::imvdb::ImvdbClient;
use crate::services::ytdlp::YtDlpClient;
use crate::utils::fs::{create_dir_all, ensure_directory};
use crate::Result;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

/// Organize every music video below `source` into `target`.
pub async fn organize(
    config: &Config,
    source: &Path,
    target: &Path,
    oddities: bool,
) -> Result<RunSummary> {
    ensure_directory(source)?;
    create_dir_all(target)?;

    println!("{}", "Organizing music videos...".bold().cyan());
    println!("  {} {}", "Source:".bold(), source.display());
    println!("  {} {}", "Target:".bold(), target.display());
    if oddities {
        println!("  {} oddities", "Parsing:".bold());
    }

    let organizer = Organizer::new(
        OrganizerConfig {
            target: target.to_path_buf(),
            parse_mode: ParseMode::from_oddities_flag(oddities),
            sidecar_name: config.sidecar_name.clone(),
        },
        Arc::new(ImvdbClient::new(config.imvdb.clone())?),
        Arc::new(YtDlpClient::new(config.ytdlp.clone())),
        Arc::new(FfprobeInspector::new(config.ffprobe.clone())),
    );

    organizer.run(source).await
}
