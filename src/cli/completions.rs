use clap::Parser;
use clap_complete::Shell;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  evalmerge completions bash > ~/.local/share/bash-completion/completions/evalmerge\n  \
                  evalmerge completions zsh > ~/.zfunc/_evalmerge")]
pub struct CompletionsArgs {
    /// Shell to generate the script for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
