//! Resinit Core - Shared library for bootstrapping ReScript projects
//!
//! This library asks a fixed set of questions about a project, merges the
//! answers into an existing (or empty) `package.json`, generates a fresh
//! `bsconfig.json`, and tells the user which command to run next.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Manifest loading, answer validation, config synthesis,
//!   file writing, registry lookups, runtime detection
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, the `Prompter` seam and
//!   the ordered question session
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use resinit_core::{config, project, session};
//!
//! let manifest = project::load_manifest(Path::new("package.json")).into_inner();
//! let answers = session::ask(&mut my_prompter, &manifest, PackageManager::Npm)?;
//! let synthesis = config::synthesize(&manifest, &answers);
//! ```

pub mod config;
pub mod presenter;
pub mod product;
pub mod project;
pub mod registry;
pub mod resolved;
pub mod runtime;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod scenarios;

// Re-export main types for convenience
pub use config::{synthesize, BuildConfig, FileExtension, ModuleFormat, Synthesis};
pub use product::ProductConfig;
pub use project::{load_manifest, write_project, ProjectManifest, WriteOutcome};
pub use registry::Registry;
pub use resolved::Resolved;
pub use runtime::PackageManager;
pub use session::{ask, PromptAnswers, Prompter};

#[cfg(feature = "tui")]
pub use tui::run;
