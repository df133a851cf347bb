//! Merge command implementation
//!
//! Resolves settings (flags, then config file, then defaults), loads the
//! three exports, merges them and writes the result.

use std::path::PathBuf;

use tracing::info;

use crate::cli::MergeArgs;
use crate::config::MergeConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::merger::{self, MergeOutcome};
use crate::ui;
use crate::writer;

/// Run the merge and print a summary
pub fn run(args: MergeArgs, verbose: bool) -> Result<()> {
    let dry_run = args.dry_run;
    let (outcome, target) = execute(&args)?;

    ui::print_summary(&outcome.stats, &target, dry_run, verbose);
    Ok(())
}

/// Resolve, load, merge and (unless dry-run) write; returns the outcome and
/// the destination path
pub fn execute(args: &MergeArgs) -> Result<(MergeOutcome, PathBuf)> {
    let config = resolve_config(args)?;
    let target = config.output_path();
    let paths = config.input_sources().resolve()?;

    let dataset = Dataset::load(&paths)?;
    let outcome = merger::merge(&dataset);

    if args.dry_run {
        info!(path = %target.display(), "Dry run, output not written");
    } else {
        writer::write_records(&outcome.records, &target)?;
    }

    Ok((outcome, target))
}

fn resolve_config(args: &MergeArgs) -> Result<MergeConfig> {
    let file_config = match &args.config {
        Some(path) => MergeConfig::load(path)?,
        None => MergeConfig::default(),
    };
    Ok(file_config.overridden_by(args.to_config()))
}
