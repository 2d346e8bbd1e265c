//! Project manifest (package.json) types and loading

use crate::resolved::Resolved;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

const NAME: &str = "name";
const SCRIPTS: &str = "scripts";
const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";

/// The parts of `package.json` this tool reads and rewrites
///
/// Maps keep the order they had in the file. The original document is kept
/// as well, so keys this tool doesn't know about are written back untouched
/// and in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectManifest {
    /// Package name, empty when the manifest has none
    pub name: String,

    /// Script name to shell command
    pub scripts: Map<String, Value>,

    /// Runtime dependencies (package name to version spec)
    pub dependencies: Map<String, Value>,

    /// Development dependencies (package name to version spec)
    pub dev_dependencies: Map<String, Value>,

    document: Map<String, Value>,
}

impl ProjectManifest {
    /// Build a manifest from a parsed JSON object
    ///
    /// Known fields that are missing, null or of the wrong type take their
    /// empty default; nothing else in the object is touched.
    pub fn from_document(document: Map<String, Value>) -> Self {
        let name = match document.get(NAME) {
            Some(Value::String(name)) => name.clone(),
            _ => String::new(),
        };

        Self {
            name,
            scripts: object_field(&document, SCRIPTS),
            dependencies: object_field(&document, DEPENDENCIES),
            dev_dependencies: object_field(&document, DEV_DEPENDENCIES),
            document,
        }
    }

    /// The manifest as a JSON object, known fields in their original position
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = self.document.clone();
        document.insert(NAME.to_string(), Value::String(self.name.clone()));
        document.insert(SCRIPTS.to_string(), Value::Object(self.scripts.clone()));

        for (key, map) in [
            (DEPENDENCIES, &self.dependencies),
            (DEV_DEPENDENCIES, &self.dev_dependencies),
        ] {
            if !map.is_empty() || document.contains_key(key) {
                document.insert(key.to_string(), Value::Object(map.clone()));
            }
        }

        document
    }

    /// Any top-level value of the manifest
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Check if a script with this exact name already exists
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// Add or replace a script
    pub fn set_script(&mut self, name: &str, command: &str) {
        self.scripts
            .insert(name.to_string(), Value::String(command.to_string()));
    }

    /// Check if a package is listed in `dependencies` or `devDependencies`
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    /// Serialize with a two-space indent
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ProjectManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

fn object_field(document: &Map<String, Value>, key: &str) -> Map<String, Value> {
    match document.get(key) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Reasons a manifest could not be read
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse manifest text; anything that is not a JSON object is rejected
pub fn parse_manifest(content: &str) -> Result<ProjectManifest, ManifestError> {
    let document: Map<String, Value> = serde_json::from_str(content)?;
    Ok(ProjectManifest::from_document(document))
}

/// Read and parse the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<ProjectManifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Load the manifest, degrading to an empty one if it is missing or malformed
pub fn load_manifest(path: &Path) -> Resolved<ProjectManifest> {
    Resolved::from_result(read_manifest(path), ProjectManifest::default)
}
