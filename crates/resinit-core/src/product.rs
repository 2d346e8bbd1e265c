//! Product configuration trait for CLI binaries
//!
//! This trait defines the product identity and well-known file names that the
//! binary passes down through every stage of a run. Nothing here is mutable;
//! the value is created once in `main` and borrowed from there on.

/// Configuration trait for the CLI product
///
/// The binary implements this trait to define:
/// - Product identity (name, display name)
/// - Files probed and written in the working directory
/// - Package registry location
/// - Minimum supported Node.js version
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command and generated banners)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Project manifest read and rewritten in place
    fn manifest_file(&self) -> &'static str {
        "package.json"
    }

    /// Build-tool configuration; its presence aborts the run
    fn build_config_file(&self) -> &'static str {
        "bsconfig.json"
    }

    /// Lockfile of the alternate package manager
    fn alternate_lockfile(&self) -> &'static str {
        "yarn.lock"
    }

    /// Name of the starter file created in a fresh source directory
    fn starter_file(&self) -> &'static str {
        "Demo.res"
    }

    /// Default package registry base URL
    fn default_registry_url(&self) -> &'static str {
        "https://registry.npmjs.org"
    }

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// Lowest Node.js version the generated project can build with
    fn min_node_version(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
