//! Node.js detection and version checking

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    let output = Command::new("node").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "Node.js",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Node.js",
            version: None,
            available: false,
        },
    }
}

/// Parse version string, handling a leading 'v' as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Compare a detected runtime against the minimum version
/// Returns an error message if the runtime is missing or too old
pub fn check_minimum(runtime: &RuntimeInfo, minimum: &str) -> Option<String> {
    let detected = match (&runtime.version, runtime.available) {
        (Some(version), true) => version,
        _ => {
            return Some(format!(
                "{} is required but was not found (install from https://nodejs.org)",
                runtime.name
            ))
        }
    };

    let (Ok(current), Ok(required)) = (parse_version(detected), parse_version(minimum)) else {
        return None; // Can't compare, skip the check
    };

    if current < required {
        Some(format!(
            "{} {} or newer is required, but {} is installed",
            runtime.name, minimum, detected
        ))
    } else {
        None
    }
}
