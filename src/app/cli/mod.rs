//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, CreateRequest};

#[derive(Parser)]
#[command(name = "create-ps-app")]
#[command(version)]
#[command(
    about = "Scaffold, register, and deploy a PeopleSoft web app",
    long_about = None
)]
struct Cli {
    /// Target directory; defaults to a slug of the app name
    project_directory: Option<PathBuf>,
    /// Stop after registering the app; skip install, build, and deploy
    #[arg(long)]
    skip_deploy: bool,
    /// Do not open the app in a browser when done
    #[arg(long)]
    no_open: bool,
    /// Generate a single-page app (inline data source, history fallback dev server)
    #[arg(long)]
    spa: bool,
    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "create_ps_app=debug" } else { "create_ps_app=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = CreateRequest {
        project_dir: cli.project_directory,
        skip_deploy: cli.skip_deploy,
        no_open: cli.no_open,
        spa: cli.spa,
    };

    if let Err(e) = api::create(request) {
        eprintln!("Something went wrong.");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
