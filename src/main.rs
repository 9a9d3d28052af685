//! devcerts - local HTTPS development certificates
//!
//! Installs a local certificate authority with mkcert, issues a key/certificate
//! pair for the development hosts, points the server's TLS setting at it and
//! keeps the certificate directory out of version control.

use std::path::PathBuf;

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod cli;
mod commands;
mod error;
mod install_help;
mod logging;
mod mkcert;
mod patch;
mod provision;
mod settings;
mod ui;

use cli::{Cli, Commands, SetupArgs};
use error::{DevcertsError, Result};
use install_help::HostPlatform;

/// Resolve the project directory, defaulting to the current directory
fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if !dir.is_dir() {
        return Err(error::fs::project_not_found(&dir));
    }

    Ok(dir)
}

fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Setup(SetupArgs::default()));

    match command {
        Commands::Setup(args) => {
            let project_dir = resolve_project_dir(cli.project_dir)?;
            commands::setup::run(&project_dir, &cli.mkcert, &args)
        }
        Commands::Check => {
            let project_dir = resolve_project_dir(cli.project_dir)?;
            commands::check::run(&project_dir, &cli.mkcert)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

/// Print a failure. A missing tool gets install instructions on stdout instead of an error line.
fn report_error(err: &DevcertsError) {
    if let DevcertsError::ToolMissing { .. } = err {
        println!("{}", install_help::instructions(HostPlatform::current()));
        return;
    }

    eprintln!("\n❌ {} {}", Style::new().red().bold().apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("   help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        report_error(&e);
        std::process::exit(1);
    }
}
