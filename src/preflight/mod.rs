//! Preflight checks module.
//!
//! Failures are reported, not fatal: a missing tool or key only means the
//! corresponding lookups yield no data.

mod ffprobe;
mod imvdb;
mod ytdlp;

use crate::models::config::Config;
use colored::Colorize;

/// Result of a preflight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn fail(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run all preflight checks.
pub fn run_preflight_checks(config: &Config) -> Vec<CheckResult> {
    vec![
        ffprobe::check(&config.ffprobe),
        ytdlp::check(&config.ytdlp),
        imvdb::check(&config.imvdb),
    ]
}

/// Print preflight check results.
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        if result.success {
            println!(
                "{} {}: {}",
                "[OK]".green(),
                result.name.bold(),
                result.message
            );
        } else {
            println!(
                "{} {}: {}",
                "[WARN]".yellow(),
                result.name.bold(),
                result.message
            );
            if let Some(ref hint) = result.hint {
                println!("  {} {}", "->".yellow(), hint);
            }
        }
    }
}

/// Check if all preflight checks passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let results = vec![
            CheckResult::ok("ffprobe", "installed"),
            CheckResult::fail("IMVDB API", "API key not configured", "set it"),
        ];
        assert!(!all_passed(&results));
        assert!(all_passed(&results[..1]));
    }
}
