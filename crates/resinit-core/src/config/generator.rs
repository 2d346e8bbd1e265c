//! Configuration synthesis from prompt answers
//!
//! Everything here is pure: the loaded manifest and the answers go in, the
//! new build configuration, updated manifest and packages to install come out.

use super::build_config::{BuildConfig, JsxSpec};
use crate::project::manifest::ProjectManifest;
use crate::session::PromptAnswers;

/// Compiler package, installed unless the project already depends on it
pub const CORE_PACKAGE: &str = "rescript";

/// Bindings listed in `bs-dependencies` when React support is requested
pub const UI_BINDINGS: &[&str] = &["@rescript/react"];

/// Packages installed alongside the bindings for React support
pub const UI_PACKAGES: &[&str] = &["@rescript/react", "react", "react-dom"];

/// JSX version written to the build configuration
pub const JSX_VERSION: u8 = 4;

/// Commands written to the manifest scripts
pub const BUILD_SCRIPT: &str = "rescript";
pub const WATCH_SCRIPT: &str = "rescript build -w";
pub const CLEAN_SCRIPT: &str = "rescript clean";

/// Result of combining the manifest with the answers
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub build_config: BuildConfig,
    pub manifest: ProjectManifest,
    /// Packages to install, in order and without duplicates
    pub dependencies: Vec<String>,
}

/// Produce every generated artifact for one run
pub fn synthesize(manifest: &ProjectManifest, answers: &PromptAnswers) -> Synthesis {
    Synthesis {
        build_config: build_config(answers),
        manifest: updated_manifest(manifest, answers),
        dependencies: dependencies_to_install(manifest, answers.add_react),
    }
}

/// Project the answers onto a fresh build configuration
pub fn build_config(answers: &PromptAnswers) -> BuildConfig {
    let mut config = BuildConfig::new(
        answers.name.clone(),
        answers.source_dir.clone(),
        answers.module_format,
        answers.file_extension,
    );

    if answers.add_react {
        config
            .bs_dependencies
            .extend(UI_BINDINGS.iter().map(|binding| binding.to_string()));
        config.jsx = Some(JsxSpec {
            version: JSX_VERSION,
        });
    }

    config
}

/// Apply the name and the three scripts to a copy of the manifest
///
/// Script names were already checked against existing scripts by the prompt
/// session, so the assignments here always overwrite.
pub fn updated_manifest(manifest: &ProjectManifest, answers: &PromptAnswers) -> ProjectManifest {
    let mut updated = manifest.clone();

    if updated.name.is_empty() {
        updated.name = answers.name.clone();
    }

    updated.set_script(&answers.build_command, BUILD_SCRIPT);
    updated.set_script(&answers.watch_command, WATCH_SCRIPT);
    updated.set_script(&answers.clean_command, CLEAN_SCRIPT);

    updated
}

/// Decide which packages still need installing
pub fn dependencies_to_install(manifest: &ProjectManifest, add_react: bool) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();

    if !manifest.depends_on(CORE_PACKAGE) {
        packages.push(CORE_PACKAGE.to_string());
    }

    if add_react {
        for package in UI_PACKAGES {
            let listed = manifest.dependencies.contains_key(*package);
            if !listed && !packages.iter().any(|p| p == package) {
                packages.push(package.to_string());
            }
        }
    }

    packages
}
