//! Runtime detection for Node.js and the package manager

use super::version;
use std::process::Command;

/// Oldest Node.js release the generated templates run on
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Short status line for the spinner
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Outcome of the pre-flight check
#[derive(Debug, Clone)]
pub struct RuntimeReport {
    pub node: RuntimeInfo,
    pub package_manager: RuntimeInfo,
}

impl RuntimeReport {
    /// Without a package manager no template can be generated
    pub fn can_scaffold(&self) -> bool {
        self.package_manager.available
    }

    /// Warning when the installed Node.js predates [`MIN_NODE_VERSION`]
    pub fn node_warning(&self) -> Option<String> {
        let found = self.node.version.as_deref()?;
        version::check_minimum(found, MIN_NODE_VERSION)
    }
}

/// Run `<program> --version` and capture the trimmed first line
fn probe(program: &str, name: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let version = stdout.lines().next().unwrap_or_default().trim().to_string();
            RuntimeInfo {
                name: name.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: name.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("node", "Node.js")
}

/// Check if the configured package manager is available
pub fn check_package_manager(program: &str) -> RuntimeInfo {
    probe(program, program)
}

/// Detect both runtimes the pipeline relies on
pub fn check_runtimes(package_manager: &str) -> RuntimeReport {
    RuntimeReport {
        node: check_node(),
        package_manager: check_package_manager(package_manager),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, version: Option<&str>) -> RuntimeInfo {
        RuntimeInfo {
            name: name.to_string(),
            version: version.map(str::to_string),
            available: version.is_some(),
        }
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let runtime = check_package_manager("nodegen-test-no-such-binary");
        assert!(!runtime.available);
        assert_eq!(runtime.describe(), "nodegen-test-no-such-binary (not installed)");
    }

    #[test]
    fn test_report_requires_package_manager() {
        let report = RuntimeReport {
            node: info("Node.js", Some("v20.11.0")),
            package_manager: info("npm", None),
        };
        assert!(!report.can_scaffold());
        assert!(report.node_warning().is_none());
    }

    #[test]
    fn test_old_node_warns() {
        let report = RuntimeReport {
            node: info("Node.js", Some("v16.20.2")),
            package_manager: info("npm", Some("8.19.4")),
        };
        assert!(report.can_scaffold());
        assert!(report.node_warning().unwrap().contains("18.0.0"));
    }

    #[test]
    fn test_describe_available() {
        assert_eq!(info("npm", Some("10.2.4")).describe(), "npm (10.2.4)");
    }
}
