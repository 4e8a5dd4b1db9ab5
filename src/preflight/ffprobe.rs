//! FFprobe preflight check.

use super::CheckResult;
use crate::models::config::FfprobeConfig;
use crate::services::ffprobe::FfprobeInspector;

/// Check if ffprobe is installed.
pub fn check(config: &FfprobeConfig) -> CheckResult {
    let inspector = FfprobeInspector::new(config.clone());
    if inspector.is_installed() {
        match inspector.get_version() {
            Ok(version) => CheckResult::ok("ffprobe", &format!("installed ({})", version)),
            Err(_) => CheckResult::ok("ffprobe", "installed"),
        }
    } else {
        CheckResult::fail(
            "ffprobe",
            "not found, local quality checks disabled",
            &crate::Error::FfprobeNotFound.to_string(),
        )
    }
}
