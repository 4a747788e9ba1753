//! Template records, dispatch, and generation
//!
//! This module provides:
//! - The closed set of built-in templates (`TemplateId`) and their records
//! - The dispatcher mapping user choices to a template
//! - The seven-step generator that materializes a template on disk
//! - package.json amendments applied at the end of a run

mod catalog;
pub mod generator;
pub mod manifest;

use crate::error::ScaffoldError;
use crate::request::{Category, Framework, Language, ScaffoldRequest};
use std::fmt;

pub use generator::{ProjectGenerator, Step};
pub use manifest::{rewrite_manifest, ManifestEdits, ModuleType};

/// Every template the tool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ServerTs,
    ServerJs,
    DiscordTs,
    DiscordJs,
    OceanicTs,
    OceanicJs,
    EmptyTs,
    EmptyJs,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::ServerTs,
        TemplateId::ServerJs,
        TemplateId::DiscordTs,
        TemplateId::DiscordJs,
        TemplateId::OceanicTs,
        TemplateId::OceanicJs,
        TemplateId::EmptyTs,
        TemplateId::EmptyJs,
    ];

    /// Map a combination of answers to its template.
    ///
    /// The framework is ignored outside the bot category. A bot without a
    /// framework cannot come out of the prompts and is reported as
    /// [`ScaffoldError::UnmappedTemplate`].
    pub fn resolve(
        category: Category,
        language: Language,
        framework: Option<Framework>,
    ) -> Result<Self, ScaffoldError> {
        use Language::{JavaScript, TypeScript};

        let id = match (category, language, framework) {
            (Category::Server, TypeScript, _) => TemplateId::ServerTs,
            (Category::Server, JavaScript, _) => TemplateId::ServerJs,
            (Category::Bot, TypeScript, Some(Framework::DiscordJs)) => TemplateId::DiscordTs,
            (Category::Bot, JavaScript, Some(Framework::DiscordJs)) => TemplateId::DiscordJs,
            (Category::Bot, TypeScript, Some(Framework::Oceanic)) => TemplateId::OceanicTs,
            (Category::Bot, JavaScript, Some(Framework::Oceanic)) => TemplateId::OceanicJs,
            (Category::Bot, _, None) => {
                return Err(ScaffoldError::UnmappedTemplate(format!(
                    "a {} bot without a framework",
                    language
                )))
            }
            (Category::Empty, TypeScript, _) => TemplateId::EmptyTs,
            (Category::Empty, JavaScript, _) => TemplateId::EmptyJs,
        };

        Ok(id)
    }

    /// Resolve the template for a finished request
    pub fn for_request(request: &ScaffoldRequest) -> Result<Self, ScaffoldError> {
        Self::resolve(request.category(), request.language(), request.framework())
    }

    pub fn spec(self) -> &'static TemplateSpec {
        catalog::lookup(self)
    }

    pub fn language(self) -> Language {
        match self {
            TemplateId::ServerTs
            | TemplateId::DiscordTs
            | TemplateId::OceanicTs
            | TemplateId::EmptyTs => Language::TypeScript,
            TemplateId::ServerJs
            | TemplateId::DiscordJs
            | TemplateId::OceanicJs
            | TemplateId::EmptyJs => Language::JavaScript,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateId::ServerTs => "express-ts",
            TemplateId::ServerJs => "express-js",
            TemplateId::DiscordTs => "discordjs-ts",
            TemplateId::DiscordJs => "discordjs-js",
            TemplateId::OceanicTs => "oceanic-ts",
            TemplateId::OceanicJs => "oceanic-js",
            TemplateId::EmptyTs => "empty-ts",
            TemplateId::EmptyJs => "empty-js",
        };
        f.write_str(name)
    }
}

/// A file written verbatim into the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root, `/`-separated
    pub path: &'static str,
    pub contents: &'static str,
}

/// Static description of one template
#[derive(Debug)]
pub struct TemplateSpec {
    pub id: TemplateId,

    /// Directories created under the project root before npm runs
    pub skeleton: &'static [&'static str],

    /// Runtime packages (`npm install`)
    pub dependencies: &'static [&'static str],

    /// Development packages (`npm install --save-dev`)
    pub dev_dependencies: &'static [&'static str],

    pub files: &'static [TemplateFile],

    /// tsconfig.json contents for TypeScript templates
    pub type_config: Option<&'static str>,

    pub manifest: ManifestEdits,

    /// Completion message shown by the notifier
    pub banner: &'static str,
}

impl TemplateSpec {
    /// Whether step 4 has anything to install
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty() || !self.dev_dependencies.is_empty()
    }

    /// Every file path the generator leaves in the project, sorted.
    /// Includes the npm manifest and tsconfig when present.
    pub fn expected_files(&self) -> Vec<&'static str> {
        let mut files: Vec<&'static str> = self.files.iter().map(|f| f.path).collect();
        files.push("package.json");
        if self.type_config.is_some() {
            files.push("tsconfig.json");
        }
        files.sort_unstable();
        files
    }
}
