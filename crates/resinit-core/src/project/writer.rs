//! Writing the generated files to the project directory

use crate::config::BuildConfig;
use crate::project::manifest::ProjectManifest;
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of one attempted write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Success(PathBuf),
    Failure { path: PathBuf, reason: String },
}

impl WriteOutcome {
    fn from_result(path: PathBuf, result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Success(path),
            Err(e) => Self::Failure {
                path,
                reason: format!("{:#}", e),
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Success(path) | Self::Failure { path, .. } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(path) => write!(f, "Created {}", path.display()),
            Self::Failure { path, reason } => {
                write!(f, "Could not write {}: {}", path.display(), reason)
            }
        }
    }
}

/// Target file names inside the project directory
#[derive(Debug, Clone)]
pub struct ProjectFiles<'a> {
    pub manifest: &'a str,
    pub build_config: &'a str,
    pub starter: &'a str,
    /// Comment written at the top of the starter file
    pub banner: String,
}

/// Check whether the build configuration was already generated
pub fn is_configured(project_dir: &Path, build_config_file: &str) -> bool {
    project_dir.join(build_config_file).exists()
}

/// Starter program placed in a freshly created source directory
pub fn starter_source(banner: &str) -> String {
    format!(
        "// {}\nlet message = \"Hello, ReScript!\"\nJs.log(message)\n",
        banner
    )
}

/// Write the manifest, the build configuration and the optional starter file
///
/// The three writes run concurrently and are all awaited; a failure in one is
/// reported as its outcome and does not stop the others. The starter file is
/// only created when the source directory does not exist yet, otherwise it
/// contributes no outcome.
pub async fn write_project(
    project_dir: &Path,
    manifest: &ProjectManifest,
    build_config: &BuildConfig,
    files: &ProjectFiles<'_>,
) -> Vec<WriteOutcome> {
    let manifest_path = project_dir.join(files.manifest);
    let config_path = project_dir.join(files.build_config);
    let source_dir = project_dir.join(build_config.source_dir());
    let starter_path = source_dir.join(files.starter);

    let (manifest_result, config_result, starter_result) = tokio::join!(
        write_json(&manifest_path, manifest.to_pretty_json()),
        write_json(&config_path, build_config.to_pretty_json()),
        write_starter(&source_dir, &starter_path, &files.banner),
    );

    let mut outcomes = vec![
        WriteOutcome::from_result(manifest_path, manifest_result),
        WriteOutcome::from_result(config_path, config_result),
    ];
    if let Some(result) = starter_result {
        outcomes.push(WriteOutcome::from_result(starter_path, result));
    }
    outcomes
}

async fn write_json(path: &Path, content: serde_json::Result<String>) -> Result<()> {
    let content = content.with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Returns `None` when the source directory already exists
async fn write_starter(source_dir: &Path, starter_path: &Path, banner: &str) -> Option<Result<()>> {
    if fs::try_exists(source_dir).await.unwrap_or(false) {
        return None;
    }

    let result = async {
        fs::create_dir_all(source_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", source_dir.display()))?;
        fs::write(starter_path, starter_source(banner))
            .await
            .with_context(|| format!("Failed to write file: {}", starter_path.display()))
    }
    .await;

    Some(result)
}
