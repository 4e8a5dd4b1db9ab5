//! Artist and director scrape commands.

use crate::core::scraper::{ScrapeSummary, Scraper};
use crate::models::catalog::EntityKind;
use crate::models::config::Config;
use crate::services::imvdb::ImvdbClient;
use crate::services::ytdlp::YtDlpClient;
use crate::services::Catalog;
use crate::utils::fs::create_dir_all;
use crate::Result;
use std::path::Path;
use std::sync::Arc;

/// Download every video of an IMVDB entity into `target`.
pub async fn scrape(
    config: &Config,
    slug: &str,
    kind: EntityKind,
    target: &Path,
) -> Result<ScrapeSummary> {
    let catalog = ImvdbClient::new(config.imvdb.clone())?;
    if !catalog.is_configured() {
        return Err(crate::Error::ImvdbApiKeyMissing);
    }

    create_dir_all(target)?;

    let scraper = Scraper::with_sidecar_name(
        target,
        config.sidecar_name.clone(),
        Arc::new(catalog),
        Arc::new(YtDlpClient::new(config.ytdlp.clone())),
    );

    scraper.scrape_entity(slug, kind).await
}
