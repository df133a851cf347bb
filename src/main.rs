//! evalmerge - evaluation dataset merger
//!
//! Joins the pairData, evaluation and cluster exports of an evaluation dataset
//! into one denormalized JSON file: one record per pair, carrying its
//! deduplicated behaviors and their cluster names.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod dataset;
mod domain;
mod error;
mod logging;
mod merger;
mod ui;
mod writer;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::configure_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => commands::merge::run(cli.merge, cli.verbose > 0),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
