//! nodegen core - Shared library for the Node.js scaffolding CLIs
//!
//! This library turns a handful of answers (project type, TypeScript or not,
//! Discord client library, project name) into a ready-to-run Node.js project.
//! It is shared by several binaries that differ only in product configuration.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - Template records, the dispatcher, the
//!   step-by-step generator, package.json edits, runtime detection
//! - **Layer 2: Product Configuration** - `ProductConfig` trait and env-driven `Settings`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nodegen_core::{templates::ProjectGenerator, Category, Language, NpmClient};
//! use nodegen_core::{ScaffoldRequest, TemplateId};
//!
//! let request = ScaffoldRequest::new(Category::Empty, Language::TypeScript, None, "demo", &cwd);
//! let template = TemplateId::for_request(&request)?.spec();
//! ProjectGenerator::new(&request, template, &NpmClient::default()).generate().await?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod request;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use request::{Category, Framework, Language, ScaffoldRequest};
pub use runtime::{NpmClient, PackageManager};
pub use templates::{TemplateId, TemplateSpec};

#[cfg(feature = "tui")]
pub use tui::run;
