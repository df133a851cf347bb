use std::path::PathBuf;

use clap::Args;

use crate::config::{InputFiles, MergeConfig};

/// Arguments for the merge (the default action)
#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    /// Output file path [default: dest.json]
    #[arg(long, short = 'o', value_name = "PATH", env = "EVALMERGE_OUT")]
    pub out: Option<PathBuf>,

    /// Directory containing the `<prefix> (<tag>).json` exports [default: .]
    #[arg(long, short = 'i', value_name = "DIR", env = "EVALMERGE_INDIR")]
    pub indir: Option<PathBuf>,

    /// Dataset tag, e.g. `eng_dapie` for `pairData (eng_dapie).json`
    #[arg(long, short = 'd', value_name = "TAG")]
    pub dataset: Option<String>,

    /// Pair data file, overriding discovery
    #[arg(long, value_name = "FILE")]
    pub pairs: Option<PathBuf>,

    /// Evaluation file, overriding discovery
    #[arg(long, value_name = "FILE")]
    pub evaluations: Option<PathBuf>,

    /// Cluster file, overriding discovery
    #[arg(long, value_name = "FILE")]
    pub clusters: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Merge and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl MergeArgs {
    /// Flags as a configuration layer, to be placed over the config file
    pub fn to_config(&self) -> MergeConfig {
        MergeConfig {
            indir: self.indir.clone(),
            dataset: self.dataset.clone(),
            out: self.out.clone(),
            inputs: InputFiles {
                pairs: self.pairs.clone(),
                evaluations: self.evaluations.clone(),
                clusters: self.clusters.clone(),
                criteria: None,
            },
        }
    }
}
