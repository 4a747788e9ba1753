//! Product configuration trait for CLI binaries
//!
//! Each binary (nodegen, nodegen-classic) implements this trait to decide
//! menu wording, pacing, and whether the bot framework question is asked.

use crate::request::{Category, Framework, ScaffoldRequest};
use std::time::Duration;

/// Configuration trait for different CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Prefix for environment overrides, e.g. `NODEGEN` reads `NODEGEN_PACKAGE_MANAGER`
    fn env_prefix(&self) -> &'static str;

    /// Menu label for a project category
    fn category_label(&self, category: Category) -> &'static str;

    /// Whether bot projects ask which client library to use
    fn offers_framework_choice(&self) -> bool;

    /// Framework used for bots when the question is not asked
    fn default_framework(&self) -> Framework {
        Framework::DiscordJs
    }

    /// Pause shown on each spinner before the step runs
    fn step_delay(&self) -> Duration;

    /// How long the completion banner stays animated
    fn banner_duration(&self) -> Duration {
        Duration::from_secs(3)
    }

    /// Where to send users who are missing Node.js or npm
    fn runtime_docs_url(&self) -> &'static str {
        "https://nodejs.org/en/download"
    }

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, request: &ScaffoldRequest) -> Vec<String> {
        let mut steps = vec![format!("cd {}", request.project_name())];

        if request.category() == Category::Bot {
            steps.push("Fill in TOKEN and CLIENT_ID in .env".to_string());
        }

        let runs_through_npm = request.uses_static_typing()
            || request.framework() == Some(Framework::Oceanic);
        if runs_through_npm {
            steps.push("npm run dev".to_string());
        } else {
            steps.push("node ./src/index.js".to_string());
        }

        steps
    }
}
