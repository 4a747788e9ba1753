//! Version comparison for installed runtimes

use anyhow::Result;
use semver::Version;

/// Compare an installed version against a required minimum.
/// Returns a warning message if the installed version is older.
pub fn check_minimum(found: &str, required: &str) -> Option<String> {
    let found_ver = match parse_version(found) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let required_ver = match parse_version(required) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if found_ver < required_ver {
        Some(format!(
            "Node.js {} or newer is recommended; you are running {}",
            required_ver, found_ver
        ))
    } else {
        None
    }
}

/// Parse version string, handling `node --version` style output
pub fn parse_version(version_str: &str) -> Result<Version> {
    // Remove leading 'v' if present
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
