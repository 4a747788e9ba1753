//! nodegen - Interactive scaffolding for Node.js projects

use clap::Parser;
use nodegen_core::{Category, ProductConfig};
use std::process::ExitCode;
use std::time::Duration;

/// nodegen product configuration
#[derive(Clone)]
pub struct NodegenConfig;

impl ProductConfig for NodegenConfig {
    fn name(&self) -> &'static str {
        "nodegen"
    }

    fn display_name(&self) -> &'static str {
        "nodegen"
    }

    fn env_prefix(&self) -> &'static str {
        "NODEGEN"
    }

    fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::Server => "ExpressJS Backend Server",
            Category::Bot => "Discord Bot",
            Category::Empty => "Any NodeJS Project",
        }
    }

    fn offers_framework_choice(&self) -> bool {
        true
    }

    fn step_delay(&self) -> Duration {
        Duration::from_millis(1000)
    }

    fn cli_description(&self) -> &'static str {
        "Generate Express servers, Discord bots and plain Node.js projects"
    }
}

#[derive(Parser, Debug)]
#[command(name = "nodegen")]
#[command(about = "Generate Express servers, Discord bots and plain Node.js projects")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = NodegenConfig;

    nodegen_core::tui::finish(nodegen_core::run(&config).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use nodegen_core::{Framework, Language, ScaffoldRequest};
    use std::path::Path;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<_> = Category::ALL
            .into_iter()
            .map(|c| NodegenConfig.category_label(c))
            .collect();
        assert_eq!(
            labels,
            ["ExpressJS Backend Server", "Discord Bot", "Any NodeJS Project"]
        );
    }

    #[test]
    fn test_oceanic_js_runs_through_npm() {
        let request = ScaffoldRequest::new(
            Category::Bot,
            Language::JavaScript,
            Some(Framework::Oceanic),
            "bot",
            Path::new("/tmp"),
        );
        let steps = NodegenConfig.next_steps(&request);
        assert_eq!(steps.first().map(String::as_str), Some("cd bot"));
        assert_eq!(steps.last().map(String::as_str), Some("npm run dev"));
    }
}
