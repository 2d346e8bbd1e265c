//! User-facing text
//!
//! Pure formatting only; printing happens in the `tui` module.

use crate::project::manifest::ProjectManifest;
use crate::project::writer::WriteOutcome;
use crate::runtime::PackageManager;

/// Bordered startup banner with the product name and version
pub fn banner(display_name: &str, version: &str) -> Vec<String> {
    let title = format!("{} v{}", display_name, version);
    let width = title.chars().count() + 4;
    let border = "─".repeat(width);

    vec![
        format!("╭{}╮", border),
        format!("│  {}  │", title),
        format!("╰{}╯", border),
    ]
}

/// Comment written at the top of generated source files
pub fn generated_banner(name: &str, version: &str) -> String {
    format!("Generated by {} {}", name, version)
}

/// Message shown when the build configuration already exists
pub fn already_configured(build_config_file: &str) -> String {
    format!(
        "{} already exists in this directory, nothing to do",
        build_config_file
    )
}

/// The manifest as it will be written, for confirmation
pub fn pending_manifest(manifest: &ProjectManifest) -> String {
    manifest
        .to_pretty_json()
        .unwrap_or_else(|e| format!("<could not render manifest: {}>", e))
}

/// One line per write outcome
pub fn outcome_lines(outcomes: &[WriteOutcome]) -> Vec<(bool, String)> {
    outcomes
        .iter()
        .map(|outcome| (outcome.is_success(), outcome.to_string()))
        .collect()
}

/// The command to run once the files are written
pub fn run_instruction(
    package_manager: PackageManager,
    packages: &[String],
    watch_command: &str,
) -> String {
    package_manager.install_and_run(packages, watch_command)
}
