//! mdtoc - Markdown table of contents CLI
//!
//! Inserts, refreshes and removes `<!-- TOC -->` blocks and section numbers
//! in Markdown files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::CommandContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = CommandContext::from_cli(&cli);
    match cli.command {
        Some(command) => execute_command(command, &ctx),
        None => {
            println!(
                "{} Run {} to see the available commands",
                "mdtoc".bold(),
                "mdtoc --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(command: Commands, ctx: &CommandContext) -> Result<()> {
    tracing::debug!(?command, "Executing command");
    match command {
        Commands::Update { edit, line } => commands::run_update(ctx, &edit, line),
        Commands::Delete { edit } => commands::run_delete(ctx, &edit),
        Commands::UpdateSections { edit } => commands::run_update_sections(ctx, &edit),
        Commands::DeleteSections { edit } => commands::run_delete_sections(ctx, &edit),
        Commands::OnSave { file } => commands::run_on_save(ctx, &file),
        Commands::Headers { file, json } => commands::run_headers(ctx, &file, json),
    }
}
