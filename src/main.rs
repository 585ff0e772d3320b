//! taiwan-skill - Taiwan skill installer for AI coding assistants
//!
//! Copies the Taiwan e-invoice, payment and logistics skill bundles into the
//! configuration folders of AI coding assistants (Claude, Cursor, Windsurf, etc.),
//! either per project or globally under the user's home directory.

use clap::Parser;
use miette::Diagnostic;

mod assets;
mod cli;
mod commands;
mod common;
mod error;
mod installer;
mod logging;
mod package_registry;
mod platform;
mod progress;
mod skill;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(cli.skill, cli.assets, &args),
        Commands::List => commands::list::run(cli.skill, cli.assets),
        Commands::Info => commands::info::run(cli.skill),
        Commands::Versions => commands::versions::run(cli.skill),
        Commands::Update => commands::update::run(cli.skill),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
