//! Package manager detection and command formatting

use std::path::Path;

/// Package manager whose verbs appear in the suggested commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Use Yarn when its lockfile is present in `project_dir`, npm otherwise
    pub fn detect(project_dir: &Path, yarn_lockfile: &str) -> Self {
        if project_dir.join(yarn_lockfile).is_file() {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    /// Verb that adds packages
    pub fn install_verb(&self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Yarn => "yarn add",
        }
    }

    /// Verb that runs a manifest script
    pub fn run_verb(&self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Yarn => "yarn",
        }
    }

    /// Command that runs `script`
    pub fn run_command(&self, script: &str) -> String {
        format!("{} {}", self.run_verb(), script)
    }

    /// Install the packages (if any) then run `script`
    pub fn install_and_run(&self, packages: &[String], script: &str) -> String {
        if packages.is_empty() {
            self.run_command(script)
        } else {
            format!(
                "{} {} && {}",
                self.install_verb(),
                packages.join(" "),
                self.run_command(script)
            )
        }
    }
}
