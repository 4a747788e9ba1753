//! Package manager invocation
//!
//! Every command is awaited to completion; the generator never moves on
//! while an install is still writing into the project directory.

use crate::error::ScaffoldError;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// External collaborator that initialises manifests and installs packages
pub trait PackageManager: Send + Sync {
    /// Create a default package.json in `dir` (`npm init -y`)
    fn init(&self, dir: &Path) -> impl Future<Output = Result<(), ScaffoldError>> + Send;

    /// Install `packages` into `dir`, as dev dependencies when `dev` is set
    fn install(
        &self,
        dir: &Path,
        packages: &[&str],
        dev: bool,
    ) -> impl Future<Output = Result<(), ScaffoldError>> + Send;
}

/// npm (or a compatible CLI) run as a subprocess
#[derive(Debug, Clone)]
pub struct NpmClient {
    program: String,
}

impl NpmClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for an install invocation
    pub fn install_args<'a>(packages: &[&'a str], dev: bool) -> Vec<&'a str> {
        let mut args = vec!["install"];
        if dev {
            args.push("--save-dev");
        }
        args.extend_from_slice(packages);
        args
    }

    async fn run(&self, dir: &Path, args: &[&str]) -> Result<(), ScaffoldError> {
        let command = format!("{} {}", self.program, args.join(" "));

        let output = TokioCommand::new(&self.program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ScaffoldError::ExternalProcess {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = last_lines(&stderr, 5);
        let reason = match output.status.code() {
            Some(code) if detail.is_empty() => format!("exit code {}", code),
            Some(code) => format!("exit code {}\n{}", code, detail),
            None => format!("terminated by signal\n{}", detail),
        };

        Err(ScaffoldError::ExternalProcess { command, reason })
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PACKAGE_MANAGER)
    }
}

impl PackageManager for NpmClient {
    async fn init(&self, dir: &Path) -> Result<(), ScaffoldError> {
        self.run(dir, &["init", "-y"]).await
    }

    async fn install(&self, dir: &Path, packages: &[&str], dev: bool) -> Result<(), ScaffoldError> {
        if packages.is_empty() {
            return Ok(());
        }
        self.run(dir, &Self::install_args(packages, dev)).await
    }
}

/// Keep the tail of noisy npm output for error messages
fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
