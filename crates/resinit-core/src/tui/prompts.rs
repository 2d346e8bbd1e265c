//! Charm-style CLI prompts using cliclack

use crate::config::synthesize;
use crate::presenter;
use crate::product::ProductConfig;
use crate::project::{write_project, ProjectFiles};
use crate::registry::{install_specs, Registry};
use crate::runtime::{check, PackageManager};
use crate::session::{self, Choice, Prepared, Prompter, Setup, TextQuestion};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI arguments for a run
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Skip the Node.js version check
    pub skip_node_check: bool,

    /// Don't query the registry for package versions
    pub offline: bool,
}

/// [`Prompter`] backed by cliclack
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(&mut self, question: TextQuestion) -> Result<String> {
        let question = Arc::new(question);
        let prompt = match &question.hint {
            Some(hint) => format!("{} {}", question.prompt, hint.dimmed()),
            None => question.prompt.clone(),
        };

        loop {
            let mut input = cliclack::input(&prompt);
            if let Some(default) = &question.default {
                input = input.placeholder(default).default_input(default);
            }

            let validator = Arc::clone(&question);
            let raw: String = input
                .validate(move |value: &String| validator.check(value).map(|_| ()))
                .interact()?;

            // cliclack hands back the raw text, so trim and re-check it here
            match question.check(&raw) {
                Ok(answer) => return Ok(answer),
                Err(message) => cliclack::log::warning(message)?,
            }
        }
    }

    fn choice(&mut self, prompt: &str, choices: &[Choice], initial: usize) -> Result<usize> {
        let mut select = cliclack::select(prompt);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, choice.label, choice.hint);
        }
        Ok(select.initial_value(initial).interact()?)
    }

    fn confirm(&mut self, prompt: &str, initial: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: RunArgs, cli_version: &str) -> Result<()> {
    let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let _ = console::Term::stdout().clear_screen();
    for line in presenter::banner(config.display_name(), cli_version) {
        println!("{}", line.cyan());
    }
    println!();

    cliclack::intro(format!("Set up {}", project_dir.display()))?;

    // Step 1: Check Node.js
    if args.skip_node_check {
        cliclack::log::info("Skipping Node.js check")?;
    } else if !handle_node_check(config)? {
        return Ok(());
    }

    // Step 2: Refuse to touch an existing build configuration, then ask questions
    let mut prompter = CliclackPrompter;
    let Prepared {
        manifest,
        package_manager,
        answers,
    } = match session::prepare(&mut prompter, config, &project_dir)? {
        Setup::Ready(prepared) => prepared,
        Setup::AlreadyConfigured => {
            cliclack::outro_cancel(presenter::already_configured(config.build_config_file()))?;
            return Ok(());
        }
    };
    let synthesis = synthesize(&manifest, &answers);

    // Step 3: Confirm the pending manifest
    cliclack::note(
        config.manifest_file(),
        presenter::pending_manifest(&synthesis.manifest),
    )?;
    if !session::confirm_write(&mut prompter)? {
        cliclack::outro_cancel("Cancelled, no files were written")?;
        return Ok(());
    }

    // Step 4: Write files while resolving package versions
    let files = ProjectFiles {
        manifest: config.manifest_file(),
        build_config: config.build_config_file(),
        starter: config.starter_file(),
        banner: presenter::generated_banner(config.name(), cli_version),
    };

    let spinner = cliclack::spinner();
    spinner.start("Writing files...");
    let (outcomes, packages) = tokio::join!(
        write_project(
            &project_dir,
            &synthesis.manifest,
            &synthesis.build_config,
            &files
        ),
        resolve_packages(config, &synthesis.dependencies, args.offline),
    );
    spinner.stop("Done");

    for (success, line) in presenter::outcome_lines(&outcomes) {
        if success {
            cliclack::log::success(line)?;
        } else {
            cliclack::log::error(line)?;
        }
    }

    // Step 5: Show the command to run next
    print_next_step(package_manager, &packages, &answers.watch_command)?;

    Ok(())
}

/// Returns false when Node.js is missing or too old
fn handle_node_check<C: ProductConfig>(config: &C) -> Result<bool> {
    let node = check::check_node();

    if let Some(error) = check::check_minimum(&node, config.min_node_version()) {
        cliclack::log::error(error)?;
        cliclack::outro_cancel("Please install a supported Node.js version and try again.")?;
        return Ok(false);
    }

    cliclack::log::success(format!(
        "{} installed ({})",
        node.name,
        node.version.as_deref().unwrap_or("unknown")
    ))?;
    Ok(true)
}

/// Install arguments for the packages, with versions unless offline
async fn resolve_packages<C: ProductConfig>(
    config: &C,
    packages: &[String],
    offline: bool,
) -> Vec<String> {
    if offline || packages.is_empty() {
        return packages.to_vec();
    }

    match Registry::from_config(config) {
        Ok(registry) => install_specs(&registry.resolve_all(packages).await),
        Err(_) => packages.to_vec(),
    }
}

fn print_next_step(
    package_manager: PackageManager,
    packages: &[String],
    watch_command: &str,
) -> Result<()> {
    let instruction = presenter::run_instruction(package_manager, packages, watch_command);

    println!();
    println!("  Now run");
    println!();
    println!("  {}", instruction.cyan().bold());

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
