//! Build configuration types and synthesis

pub mod build_config;
pub mod generator;

pub use build_config::{BuildConfig, FileExtension, JsxSpec, ModuleFormat, PackageSpec, SourceSpec};
pub use generator::{synthesize, Synthesis};
