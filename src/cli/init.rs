use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Choose an assistant interactively:\n    taiwan-skill init\n\n\
                   Install for one assistant:\n    taiwan-skill init --ai cursor\n\n\
                   Install into the home directory:\n    taiwan-skill init --ai claude --global\n\n\
                   Install for every assistant:\n    taiwan-skill init --ai all\n\n\
                   Replace an existing installation:\n    taiwan-skill init --ai cursor --force")]
pub struct InitArgs {
    /// AI assistant to install for (e.g. claude, cursor), or "all"
    #[arg(long, short = 'a', value_name = "ASSISTANT")]
    pub ai: Option<String>,

    /// Overwrite an existing installation
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Install into the user's home directory instead of the current project
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Never prompt; use the detected assistant and defaults
    #[arg(long, short = 'y')]
    pub yes: bool,
}
