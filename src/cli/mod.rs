//! CLI definitions using clap derive API
//!
//! Running `evalmerge` without a subcommand performs the merge; the flags for
//! it live in [`merge::MergeArgs`] and are flattened into the top level.

use clap::ArgAction;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod merge;

pub use completions::CompletionsArgs;
pub use merge::MergeArgs;

/// evalmerge - join evaluation exports into one dataset
#[derive(Parser, Debug)]
#[command(
    name = "evalmerge",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Join pair, evaluation and cluster exports into one denormalized JSON file",
    long_about = "evalmerge reads the pairData, evaluation and cluster exports of a dataset, \
                  attaches each pair's deduplicated behaviors with their cluster names, \
                  and writes the merged records as one JSON array.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  evalmerge                                  \x1b[90m# Merge exports in the current directory\x1b[0m\n   \
                  evalmerge -i exports -d eng_dapie          \x1b[90m# Pick one dataset in a directory\x1b[0m\n   \
                  evalmerge --out build/dest.json            \x1b[90m# Choose the destination\x1b[0m\n   \
                  evalmerge -c evalmerge.yaml --dry-run      \x1b[90m# Check a configuration without writing\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub merge: MergeArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
