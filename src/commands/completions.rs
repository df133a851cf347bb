//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, io_error};

/// Print the completion script for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut script = Vec::new();
    generate(args.shell, &mut script);
    std::io::stdout()
        .lock()
        .write_all(&script)
        .map_err(|e| io_error(format!("Failed to write completions: {}", e)))
}

fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        generate(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_script_completes_merge_flags() {
        let script = script(Shell::Bash);
        for flag in ["--indir", "--dataset", "--out", "--dry-run", "completions"] {
            assert!(script.contains(flag), "missing {flag}");
        }
    }

    #[test]
    fn test_fish_script_completes_input_files() {
        let script = script(Shell::Fish);
        assert!(script.contains("complete -c evalmerge"));
        assert!(script.contains("-l pairs"));
        assert!(script.contains("-l evaluations"));
        assert!(script.contains("-l clusters"));
    }
}
