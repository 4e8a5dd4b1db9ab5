//! IMVDB API preflight check.

use super::CheckResult;
use crate::models::config::ImvdbConfig;

/// Check that an IMVDB API key is configured.
pub fn check(config: &ImvdbConfig) -> CheckResult {
    if config.usable_key().is_some() {
        CheckResult::ok("IMVDB API", "API key configured")
    } else {
        CheckResult::fail(
            "IMVDB API",
            "API key not configured, catalog lookups disabled",
            &crate::Error::ImvdbApiKeyMissing.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_key_fails() {
        let config = ImvdbConfig {
            api_key: Some("YOUR_IMVDB_API_KEY".to_string()),
            ..Default::default()
        };
        assert!(!check(&config).success);

        let config = ImvdbConfig {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(check(&config).success);
    }
}
