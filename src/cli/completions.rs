use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    taiwan-skill completions bash > ~/.bash_completion.d/taiwan-skill\n\n\
                  Generate zsh completions:\n    taiwan-skill completions zsh > ~/.zfunc/_taiwan-skill\n\n\
                  Generate fish completions:\n    taiwan-skill completions fish > ~/.config/fish/completions/taiwan-skill.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
