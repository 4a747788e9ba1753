//! nodegen-classic - discord.js flavoured Node.js scaffolding

use clap::Parser;
use nodegen_core::{Category, ProductConfig};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Clone)]
pub struct ClassicConfig;

impl ProductConfig for ClassicConfig {
    fn name(&self) -> &'static str {
        "nodegen-classic"
    }

    fn display_name(&self) -> &'static str {
        "nodegen classic"
    }

    fn env_prefix(&self) -> &'static str {
        "NODEGEN_CLASSIC"
    }

    fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::Server => "Express server",
            Category::Bot => "discord.js bot",
            Category::Empty => "Empty Node.js project",
        }
    }

    // Bots are always discord.js
    fn offers_framework_choice(&self) -> bool {
        false
    }

    fn step_delay(&self) -> Duration {
        Duration::from_millis(500)
    }

    fn banner_duration(&self) -> Duration {
        Duration::from_secs(2)
    }

    fn cli_description(&self) -> &'static str {
        "Generate Express servers, discord.js bots and plain Node.js projects"
    }
}

#[derive(Parser, Debug)]
#[command(name = "nodegen-classic")]
#[command(about = "Generate Express servers, discord.js bots and plain Node.js projects")]
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

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();

    nodegen_core::tui::finish(nodegen_core::run(&ClassicConfig).await)
}
