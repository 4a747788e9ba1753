//! Charm-style CLI prompts using cliclack

use super::banner;
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::request::{
    validate_project_name, Category, Framework, Language, ScaffoldRequest, DEFAULT_PROJECT_NAME,
};
use crate::runtime::{self, NpmClient, PackageManager};
use crate::templates::{ProjectGenerator, TemplateId, TemplateSpec};
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    // Step 1: Refuse to prompt without a terminal instead of hanging
    ensure_interactive(io::stdin().is_terminal())?;

    let settings = Settings::from_env(config);
    cliclack::intro(config.display_name())?;

    // Step 2: Make sure the package manager is around before asking anything
    check_runtimes(config, &settings)?;

    // Step 3: Collect the answers into an immutable request
    let base_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let request = collect_request(config, &base_dir)?;

    // Step 4: Pick the template
    let template = TemplateId::for_request(&request)?.spec();

    // Step 5: Generate
    let npm = NpmClient::new(settings.package_manager.as_str());
    create_project(&request, template, &npm, &settings).await?;

    // Step 6: Celebrate and show next steps
    banner::celebrate(template.banner, settings.banner_duration).await?;
    print_next_steps(config, &request)?;

    Ok(())
}

/// Exit status for an interrupted run, as a shell reports SIGINT
pub const INTERRUPTED_EXIT_STATUS: u8 = 130;

/// Turn the outcome of [`run`] into the process exit code
pub fn finish(result: Result<()>) -> ExitCode {
    // Ensure cursor is visible on exit
    let _ = console::Term::stderr().show_cursor();

    let status = exit_status(&result);
    if let Err(e) = &result {
        let message = if status == INTERRUPTED_EXIT_STATUS {
            "Cancelled".to_string()
        } else {
            format!("{:#}", e)
        };
        if cliclack::outro_cancel(&message).is_err() {
            eprintln!("Error: {}", message);
        }
    }

    ExitCode::from(status)
}

/// 0 on success, 130 when a prompt was interrupted, 1 otherwise.
///
/// Prompts hold the terminal in raw mode, so Ctrl+C arrives as an
/// `Interrupted` read error rather than a signal.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) if is_interrupted(e) => INTERRUPTED_EXIT_STATUS,
        Err(_) => 1,
    }
}

fn is_interrupted(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
    })
}

fn ensure_interactive(stdin_is_terminal: bool) -> Result<(), ScaffoldError> {
    if stdin_is_terminal {
        Ok(())
    } else {
        Err(ScaffoldError::NotInteractive)
    }
}

fn check_runtimes<C: ProductConfig>(config: &C, settings: &Settings) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let report = runtime::check_runtimes(&settings.package_manager);

    if !report.can_scaffold() {
        spinner.error(format!("{} is not installed", settings.package_manager));

        let action: &str = cliclack::select("What would you like to do?")
            .item(
                "docs",
                format!("Open the Node.js download page ({})", config.runtime_docs_url()),
                "",
            )
            .item("cancel", "Cancel", "")
            .interact()?;

        if action == "docs" {
            open::that(config.runtime_docs_url())
                .context("Failed to open the Node.js download page")?;
        }

        anyhow::bail!(
            "{} is required to initialise projects; install Node.js and run {} again.",
            settings.package_manager,
            config.name()
        );
    }

    spinner.stop(format!(
        "Detected runtimes: {}, {}",
        report.node.describe(),
        report.package_manager.describe()
    ));

    if let Some(warning) = report.node_warning() {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn collect_request<C: ProductConfig>(config: &C, base_dir: &Path) -> Result<ScaffoldRequest> {
    let mut select = cliclack::select("What do you want to generate?");
    for category in Category::ALL {
        select = select.item(category, config.category_label(category), "");
    }
    let category: Category = select.interact()?;

    let typescript: bool = cliclack::confirm("Do you want to use TypeScript?")
        .initial_value(true)
        .interact()?;
    let language = if typescript {
        Language::TypeScript
    } else {
        Language::JavaScript
    };

    let framework = match category {
        Category::Bot if config.offers_framework_choice() => {
            let mut select = cliclack::select("What is the framework you want to use?");
            for framework in Framework::ALL {
                select = select.item(framework, framework.display_name(), "");
            }
            Some(select.interact()?)
        }
        Category::Bot => Some(config.default_framework()),
        Category::Server | Category::Empty => None,
    };

    let name: String = cliclack::input("What should the project be called?")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(|input: &String| validate_project_name(input))
        .interact()?;

    Ok(ScaffoldRequest::new(
        category, language, framework, &name, base_dir,
    ))
}

async fn create_project<P: PackageManager>(
    request: &ScaffoldRequest,
    template: &'static TemplateSpec,
    package_manager: &P,
    settings: &Settings,
) -> Result<()> {
    let generator = ProjectGenerator::new(request, template, package_manager);

    cliclack::log::info(format!(
        "Template: {} in {}",
        template.id,
        request.target_dir().display()
    ))?;

    for step in generator.steps() {
        let spinner = cliclack::spinner();
        spinner.start(step.progress_message());

        if !settings.step_delay.is_zero() {
            tokio::time::sleep(settings.step_delay).await;
        }

        if let Err(e) = generator.run_step(step).await {
            spinner.error(step.failure_message());
            return Err(e.into());
        }

        spinner.stop(step.success_message());
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, request: &ScaffoldRequest) -> Result<()> {
    let steps = config.next_steps(request);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn env_prefix(&self) -> &'static str {
            "NODEGEN_PROMPTS_TEST"
        }

        fn category_label(&self, _category: Category) -> &'static str {
            "label"
        }

        fn offers_framework_choice(&self) -> bool {
            true
        }

        fn step_delay(&self) -> Duration {
            Duration::ZERO
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }
    }

    #[test]
    fn test_success_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(finish(Ok(())), ExitCode::SUCCESS);
    }

    #[test]
    fn test_aborted_step_exits_one() {
        let result: Result<()> = Err(ScaffoldError::DirectoryExists(PathBuf::from("demo")).into());
        assert_eq!(exit_status(&result), 1);
        assert_eq!(finish(result), ExitCode::FAILURE);
    }

    #[test]
    fn test_interrupted_prompt_exits_130() {
        let interrupted = || -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "read interrupted").into())
        };
        assert_eq!(exit_status(&interrupted()), INTERRUPTED_EXIT_STATUS);
        assert_eq!(finish(interrupted()), ExitCode::from(130));
    }

    #[test]
    fn test_interrupt_is_found_behind_context() {
        let result: Result<()> = Err(anyhow::Error::from(io::Error::new(
            io::ErrorKind::Interrupted,
            "read interrupted",
        ))
        .context("Failed to read the project name"));
        assert_eq!(exit_status(&result), INTERRUPTED_EXIT_STATUS);
    }

    #[test]
    fn test_other_io_errors_exit_one() {
        let result: Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into());
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_ensure_interactive() {
        assert!(ensure_interactive(true).is_ok());
        assert!(matches!(
            ensure_interactive(false),
            Err(ScaffoldError::NotInteractive)
        ));
    }

    #[tokio::test]
    async fn test_run_without_terminal_fails_fast() {
        // Prompts would block when the tests run from a terminal
        if io::stdin().is_terminal() {
            return;
        }

        let err = run(&TestProduct).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::NotInteractive)
        ));
        assert_eq!(exit_status(&Err(err)), 1);
    }
}
