//! CLI definitions using clap derive API
//!
//! Argument types for commands with options live in submodules:
//! - init: Init command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::skill::SkillKind;

pub mod completions;
pub mod init;

pub use completions::CompletionsArgs;
pub use init::InitArgs;

/// Taiwan skill installer
///
/// Install Taiwan e-invoice, payment and logistics skills into AI coding assistants.
#[derive(Parser, Debug)]
#[command(
    name = "taiwan-skill",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install Taiwan e-invoice, payment and logistics skills into AI coding assistants",
    long_about = "taiwan-skill copies skill bundles (instructions, API references and helper \
                  scripts for ECPay, SmilePay, Amego, NewebPay and PAYUNi) into the configuration \
                  folders of AI coding assistants (Claude Code, Cursor, Windsurf, ...), either in \
                  the current project or in the user's home directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  taiwan-skill init                         \x1b[90m# Pick an assistant interactively\x1b[0m\n   \
                  taiwan-skill init --ai cursor             \x1b[90m# Install for Cursor\x1b[0m\n   \
                  taiwan-skill init --ai claude --global    \x1b[90m# Install into ~/.claude\x1b[0m\n   \
                  taiwan-skill init --ai all                \x1b[90m# Install for every assistant\x1b[0m\n   \
                  taiwan-skill --skill payment init         \x1b[90m# Install the payment skill\x1b[0m\n   \
                  taiwan-skill list                         \x1b[90m# List supported assistants\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Skill bundle to operate on
    #[arg(
        long,
        short = 's',
        global = true,
        value_enum,
        default_value = "invoice",
        env = "TAIWAN_SKILL"
    )]
    pub skill: SkillKind,

    /// Directory containing the bundled skill assets
    #[arg(long, global = true, env = "TAIWAN_SKILL_ASSETS", value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the skill into an AI assistant
    Init(InitArgs),

    /// List supported AI assistants and their install locations
    List,

    /// Show skill information
    Info,

    /// List published versions
    Versions,

    /// Check for a newer release
    Update,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
