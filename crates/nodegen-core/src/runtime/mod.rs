//! Runtime detection and package manager invocation
//!
//! This module provides:
//! - Node.js and package manager detection with a minimum-version warning
//! - The `PackageManager` seam and its npm subprocess implementation

pub mod check;
pub mod package_manager;
pub mod version;

pub use check::{check_node, check_package_manager, check_runtimes, RuntimeInfo, RuntimeReport};
pub use package_manager::{NpmClient, PackageManager};
