//! CLI Adapter.

mod check;
mod generate;
mod list;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "kl-manifest")]
#[command(version)]
#[command(
    about = "Generate the examples.json manifest listing .kl example programs",
    long_about = None
)]
struct Cli {
    /// Directory holding the examples directory (default: directory of this executable)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the examples directory and write the manifest (default)
    #[clap(visible_alias = "g")]
    Generate {
        /// Print the manifest instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Exit non-zero when the manifest on disk is missing or out of date
    #[clap(visible_alias = "c")]
    Check,
    /// Print the examples recorded in the manifest
    #[clap(visible_alias = "ls")]
    List,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result: Result<i32, AppError> = crate::app::api::resolve_root(cli.root).and_then(|root| {
        match cli.command.unwrap_or(Commands::Generate { dry_run: false }) {
            Commands::Generate { dry_run } => generate::run_generate(&root, dry_run).map(|_| 0),
            Commands::Check => check::run_check(&root),
            Commands::List => list::run_list(&root).map(|_| 0),
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(AppError::MissingDirectory { path }) => {
            println!("Directory {} does not exist.", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
