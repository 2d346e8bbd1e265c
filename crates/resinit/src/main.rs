//! resinit CLI - Interactive ReScript project setup

use anyhow::Result;
use clap::Parser;
use resinit_core::tui::RunArgs;
use resinit_core::ProductConfig;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// resinit product configuration
#[derive(Clone)]
pub struct ResinitConfig;

impl ProductConfig for ResinitConfig {
    fn name(&self) -> &'static str {
        "resinit"
    }

    fn display_name(&self) -> &'static str {
        "resinit"
    }

    fn registry_url_env(&self) -> &'static str {
        "RESINIT_REGISTRY_URL"
    }

    fn min_node_version(&self) -> &'static str {
        "14.0.0"
    }
}

#[derive(Parser, Debug)]
#[command(name = "resinit")]
#[command(about = "Set up package.json and bsconfig.json for a ReScript project")]
#[command(version)]
pub struct Args {
    /// Skip the Node.js version check
    #[arg(long = "skip-node-check")]
    pub skip_node_check: bool,

    /// Suggest packages without looking up their latest versions
    #[arg(long)]
    pub offline: bool,
}

impl From<Args> for RunArgs {
    fn from(args: Args) -> Self {
        RunArgs {
            skip_node_check: args.skip_node_check,
            offline: args.offline,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
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

    let args = Args::parse();
    let config = ResinitConfig;

    let result = resinit_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
