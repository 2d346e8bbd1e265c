//! Runtime detection and package manager selection
//!
//! This module provides:
//! - Node.js detection with a minimum version check
//! - npm/Yarn detection and the commands suggested for each

pub mod check;
pub mod package_manager;

pub use check::{check_minimum, check_node, RuntimeInfo};
pub use package_manager::PackageManager;
