//! Validators for prompt answers
//!
//! Each validator takes raw user input and returns the message to show when
//! the input is rejected. Input is trimmed before any rule is applied.

use std::collections::BTreeSet;

/// Longest package name the npm registry accepts
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Names npm refuses outright
const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules, which cannot be used as package names
const CORE_MODULES: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "module",
    "net",
    "os",
    "path",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

/// Check a project name against npm package-name rules
pub fn validate_package_name(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("name length must be greater than zero".to_string());
    }
    if input.starts_with('.') {
        return Err("name cannot start with a period".to_string());
    }
    if input.starts_with('_') {
        return Err("name cannot start with an underscore".to_string());
    }
    let lower = input.to_lowercase();
    if BLACKLISTED_NAMES.contains(&lower.as_str()) {
        return Err(format!("{} is a blacklisted name", lower));
    }
    if CORE_MODULES.contains(&lower.as_str()) {
        return Err(format!("{} is a core module name", lower));
    }
    if input.chars().count() > MAX_PACKAGE_NAME_LENGTH {
        return Err(format!(
            "name can no longer contain more than {} characters",
            MAX_PACKAGE_NAME_LENGTH
        ));
    }
    if lower != input {
        return Err("name can no longer contain capital letters".to_string());
    }

    let url_friendly = match input.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, name)) => is_url_safe(scope) && is_url_safe(name),
            None => false,
        },
        None => is_url_safe(input),
    };
    if !url_friendly {
        return Err("name can only contain URL-friendly characters".to_string());
    }

    Ok(())
}

/// Characters a new package name may contain
///
/// npm still publishes old names with `~'!()*`, but refuses them for new
/// packages, so they are rejected here too.
fn is_url_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

/// Check the source directory answer
pub fn validate_source_dir(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Please enter a source directory".to_string());
    }
    Ok(())
}

/// Check a script name against the scripts that are already taken
pub fn validate_script_name(taken: &BTreeSet<String>, input: &str) -> Result<(), String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("Please enter a script name".to_string());
    }
    if taken.contains(name) {
        return Err(format!(
            "Script \"{}\" already exists, please pick another",
            name
        ));
    }
    Ok(())
}
