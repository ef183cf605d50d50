//! # natreg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use natreg_cli::format::{run_format, FormatArgs};
use natreg_cli::list::{run_list, ListArgs};
use natreg_cli::typing::{run_type, TypeArgs};
use natreg_cli::validate::{run_validate, ValidateArgs};

/// National registration console tools.
///
/// Masks, validates and replays CPF/CNPJ input exactly as the
/// registration form does.
#[derive(Parser, Debug)]
#[command(name = "natreg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML form configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render input through the live CPF/CNPJ mask.
    Format(FormatArgs),

    /// Validate CPF/CNPJ check digits.
    Validate(ValidateArgs),

    /// Replay input keystroke by keystroke through a form session, then submit.
    #[command(name = "type")]
    Type(TypeArgs),

    /// Render a listing page JSON file as table rows.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "natreg CLI starting");

    let config = match natreg_cli::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Format(args) => run_format(&args, &mut out),
        Commands::Validate(args) => run_validate(&args, &mut out),
        Commands::Type(args) => run_type(&args, &config, &mut out),
        Commands::List(args) => run_list(&args, &config, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
