//! Build-tool configuration (bsconfig.json) types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Module format of the generated JavaScript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModuleFormat {
    #[default]
    #[serde(rename = "commonjs")]
    CommonJs,
    #[serde(rename = "es6")]
    Es6,
    #[serde(rename = "es6-global")]
    Es6Global,
}

impl ModuleFormat {
    /// All formats in the order they are offered
    pub const ALL: [ModuleFormat; 3] = [Self::CommonJs, Self::Es6, Self::Es6Global];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommonJs => "commonjs",
            Self::Es6 => "es6",
            Self::Es6Global => "es6-global",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suffix of the generated JavaScript files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileExtension {
    #[default]
    #[serde(rename = ".bs.js")]
    BsJs,
    #[serde(rename = ".js")]
    Js,
    #[serde(rename = ".mjs")]
    Mjs,
    #[serde(rename = ".cjs")]
    Cjs,
}

impl FileExtension {
    /// All extensions in the order they are offered
    pub const ALL: [FileExtension; 4] = [Self::BsJs, Self::Js, Self::Mjs, Self::Cjs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BsJs => ".bs.js",
            Self::Js => ".js",
            Self::Mjs => ".mjs",
            Self::Cjs => ".cjs",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory the compiler picks sources from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub dir: String,
    pub subdirs: bool,
}

/// Where and how compiled output is emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub module: ModuleFormat,
    #[serde(rename = "in-source")]
    pub in_source: bool,
    pub suffix: FileExtension,
}

/// JSX settings attached when React support is requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxSpec {
    pub version: u8,
}

/// Contents of `bsconfig.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    pub name: String,
    pub namespace: bool,
    pub bs_dependencies: Vec<String>,
    /// Always a single entry; kept as a list to match the file format
    pub sources: Vec<SourceSpec>,
    pub package_specs: PackageSpec,
    pub bsc_flags: Vec<String>,
    pub bs_external_includes: Vec<String>,
    pub ignored_dirs: Vec<String>,
    pub pinned_dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx: Option<JsxSpec>,
}

impl BuildConfig {
    /// Create a configuration with one source directory and no extras
    pub fn new(
        name: impl Into<String>,
        source_dir: impl Into<String>,
        module: ModuleFormat,
        suffix: FileExtension,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: true,
            bs_dependencies: Vec::new(),
            sources: vec![SourceSpec {
                dir: source_dir.into(),
                subdirs: true,
            }],
            package_specs: PackageSpec {
                module,
                in_source: true,
                suffix,
            },
            bsc_flags: Vec::new(),
            bs_external_includes: Vec::new(),
            ignored_dirs: Vec::new(),
            pinned_dependencies: Vec::new(),
            jsx: None,
        }
    }

    /// The one configured source directory
    pub fn source_dir(&self) -> &str {
        self.sources
            .first()
            .map(|source| source.dir.as_str())
            .unwrap_or_default()
    }

    /// Serialize with a two-space indent
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
