//! yt-dlp preflight check.

use super::CheckResult;
use crate::models::config::YtDlpConfig;
use crate::services::ytdlp::YtDlpClient;

/// Check if yt-dlp can be started.
pub fn check(config: &YtDlpConfig) -> CheckResult {
    let client = YtDlpClient::new(config.clone());
    if client.is_installed() {
        match client.get_version() {
            Ok(version) => CheckResult::ok("yt-dlp", &format!("installed ({})", version)),
            Err(_) => CheckResult::ok("yt-dlp", "installed"),
        }
    } else {
        CheckResult::fail(
            "yt-dlp",
            &format!("`{}` not found, YouTube lookups disabled", config.program()),
            &crate::Error::YtDlpNotFound.to_string(),
        )
    }
}
