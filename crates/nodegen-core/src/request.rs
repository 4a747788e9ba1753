//! The immutable record of a user's choices

use std::fmt;
use std::path::{Path, PathBuf};

/// Project name used when the name prompt is left empty
pub const DEFAULT_PROJECT_NAME: &str = "untitled";

/// What kind of project to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Server,
    Bot,
    Empty,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Server, Category::Bot, Category::Empty];
}

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// File extension used for source stubs
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Discord client library used by bot templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    DiscordJs,
    Oceanic,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::DiscordJs, Framework::Oceanic];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::DiscordJs => "discord.js",
            Framework::Oceanic => "Oceanic.js",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything needed to select and run one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    category: Category,
    language: Language,
    framework: Option<Framework>,
    project_name: String,
    target_dir: PathBuf,
}

impl ScaffoldRequest {
    /// Build a request rooted at `base_dir`.
    ///
    /// A blank name falls back to [`DEFAULT_PROJECT_NAME`]; the framework is
    /// dropped for categories other than [`Category::Bot`].
    pub fn new(
        category: Category,
        language: Language,
        framework: Option<Framework>,
        project_name: &str,
        base_dir: &Path,
    ) -> Self {
        let project_name = normalize_project_name(project_name);
        let framework = match category {
            Category::Bot => framework,
            Category::Server | Category::Empty => None,
        };

        Self {
            category,
            language,
            framework,
            target_dir: base_dir.join(&project_name),
            project_name,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn uses_static_typing(&self) -> bool {
        self.language == Language::TypeScript
    }
}

/// Trim the answer and substitute the placeholder for an empty one
pub fn normalize_project_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reject names that would escape the working directory
pub fn validate_project_name(input: &str) -> Result<(), &'static str> {
    let name = input.trim();
    if name == "." || name == ".." {
        return Err("Project name cannot be '.' or '..'");
    }
    if name.contains(['/', '\\']) {
        return Err("Project name cannot contain path separators");
    }
    Ok(())
}
