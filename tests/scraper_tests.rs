//! Integration tests for artist/director scraping.

mod common;

use common::{stub, touch, FakeCatalog, FakeHost};
use music_video_organizer::core::scraper::{ScrapeSummary, Scraper};
use music_video_organizer::models::catalog::{CatalogCandidate, EntityKind};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn with_source(candidate: CatalogCandidate, video_id: &str) -> CatalogCandidate {
    CatalogCandidate {
        host_video_id: Some(video_id.to_string()),
        ..candidate
    }
}

#[tokio::test]
async fn test_existing_download_is_skipped_without_external_calls() {
    let temp = TempDir::new().unwrap();
    let existing = temp
        .path()
        .join("Blur")
        .join("Blur - Song 2")
        .join("Blur - Song 2.mp4");
    touch(&existing);

    let catalog = Arc::new(
        FakeCatalog::configured()
            .with_entity_videos(vec![stub(5, "Blur", "Song 2")])
            .with_detail(with_source(stub(5, "Blur", "Song 2"), "SSbBvKaM6sk")),
    );
    let host = Arc::new(FakeHost::empty());

    let summary = Scraper::new(temp.path(), catalog.clone(), host.clone())
        .scrape_entity("blur", EntityKind::Artist)
        .await
        .unwrap();

    assert_eq!(
        summary,
        ScrapeSummary {
            already_present: 1,
            ..Default::default()
        }
    );
    assert_eq!(catalog.calls(), vec!["entity:artist:blur".to_string()]);
    assert!(host.downloads().is_empty());
    assert_eq!(fs::read_to_string(&existing).unwrap(), "local video");
}

#[tokio::test]
async fn test_downloads_with_sidecar_and_skips_sourceless_entries() {
    let temp = TempDir::new().unwrap();

    let catalog = Arc::new(
        FakeCatalog::configured()
            .with_entity_videos(vec![
                stub(1, "Daft Punk", "Around the World"),
                stub(2, "The Chemical Brothers", "Let Forever Be"),
                stub(3, "Bjork", "Bachelorette"),
            ])
            .with_detail(CatalogCandidate {
                year: Some(1997),
                directors: vec!["Michel Gondry".to_string()],
                ..with_source(stub(1, "Daft Punk", "Around the World"), "LKYPYj2XX80")
            })
            .with_detail(stub(2, "The Chemical Brothers", "Let Forever Be")),
    );
    let host = Arc::new(FakeHost::empty());

    let summary = Scraper::new(temp.path(), catalog.clone(), host.clone())
        .scrape_entity("michel-gondry", EntityKind::Director)
        .await
        .unwrap();

    assert_eq!(
        summary,
        ScrapeSummary {
            downloaded: 1,
            already_present: 0,
            no_host_source: 1,
            failed: 1,
        }
    );

    let dir = temp.path().join("Daft Punk").join("Daft Punk - Around the World");
    assert_eq!(
        host.downloads(),
        vec![(
            "LKYPYj2XX80".to_string(),
            dir.join("Daft Punk - Around the World.mp4")
        )]
    );
    let nfo = fs::read_to_string(dir.join("video.nfo")).unwrap();
    assert!(nfo.contains("<director>Michel Gondry</director>"));
    assert!(nfo.contains("<youtube_id>LKYPYj2XX80</youtube_id>"));

    assert!(!temp.path().join("The Chemical Brothers").exists());
}

#[tokio::test]
async fn test_failed_download_leaves_no_sidecar() {
    let temp = TempDir::new().unwrap();

    let catalog = Arc::new(
        FakeCatalog::configured()
            .with_entity_videos(vec![stub(5, "Blur", "Song 2")])
            .with_detail(with_source(stub(5, "Blur", "Song 2"), "SSbBvKaM6sk")),
    );
    let host = Arc::new(FakeHost::empty().failing_downloads());

    let summary = Scraper::new(temp.path(), catalog, host.clone())
        .scrape_entity("blur", EntityKind::Artist)
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(host.downloads().len(), 1);
    assert!(!temp
        .path()
        .join("Blur")
        .join("Blur - Song 2")
        .join("video.nfo")
        .exists());
}

#[tokio::test]
async fn test_empty_entity() {
    let temp = TempDir::new().unwrap();
    let catalog = Arc::new(FakeCatalog::configured());
    let host = Arc::new(FakeHost::empty());

    let summary = Scraper::new(temp.path(), catalog, host)
        .scrape_entity("nobody", EntityKind::Artist)
        .await
        .unwrap();

    assert_eq!(summary, ScrapeSummary::default());
}
