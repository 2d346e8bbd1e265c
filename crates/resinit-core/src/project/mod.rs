//! Project files: the manifest, answer validation and writing
//!
//! This module provides:
//! - Tolerant `package.json` loading
//! - Validators for prompt answers
//! - Concurrent, independent writes of the generated files

pub mod manifest;
pub mod validate;
pub mod writer;

pub use manifest::{load_manifest, ManifestError, ProjectManifest};
pub use writer::{is_configured, write_project, ProjectFiles, WriteOutcome};
