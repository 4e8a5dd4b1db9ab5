//! Music Video Organizer CLI
//!
//! Organizes music video files into an artist/video library using IMVDB and
//! YouTube metadata, or downloads an artist's or director's videography.

use clap::Parser;
use music_video_organizer::cli::{
    args::{Cli, Commands},
    commands::{organize, scrape},
};
use music_video_organizer::models::catalog::EntityKind;
use music_video_organizer::models::config::{load_config, Config};
use music_video_organizer::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut config = load_config();
    if cli.win {
        config.ytdlp.windows_mode = true;
    }

    if !cli.skip_preflight {
        run_preflight_checks(&config);
    }

    match cli.command {
        Commands::Organize {
            source,
            target,
            oddities,
        } => {
            organize::organize(&config, &source, &target, oddities).await?;
        }

        Commands::Artist { slug, target } => {
            scrape::scrape(&config, &slug, EntityKind::Artist, &target).await?;
        }

        Commands::Director { slug, target } => {
            scrape::scrape(&config, &slug, EntityKind::Director, &target).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("music_video_organizer=debug")
    } else {
        EnvFilter::new("music_video_organizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks. Failures only disable the affected lookups.
fn run_preflight_checks(config: &Config) {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config);
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        tracing::warn!("Some preflight checks failed; continuing with reduced lookups");
    }
}
