//! Configuration file handling for evalmerge
//!
//! An optional `evalmerge.yaml` names the export to merge:
//!
//! ```yaml
//! indir: ./exports
//! dataset: eng_dapie
//! out: build/dest.json
//! inputs:
//!   pairs: ./pairs.json
//! ```
//!
//! Every key is optional. Command line flags (and their environment
//! variables) take precedence over the file, the file over built-in defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::dataset::InputSources;
use crate::error::{
    MergeError, Result, config_not_found, config_parse_failed, config_read_failed,
};

/// Output path used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "dest.json";

/// Merge configuration (`evalmerge.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Directory searched for `<prefix> (<tag>).json` exports
    #[serde(default)]
    pub indir: Option<PathBuf>,

    /// Dataset tag selecting one export in `indir`
    #[serde(default)]
    pub dataset: Option<String>,

    /// Destination file
    #[serde(default)]
    pub out: Option<PathBuf>,

    /// Explicit per-file paths, overriding discovery
    #[serde(default)]
    pub inputs: InputFiles,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFiles {
    #[serde(default)]
    pub pairs: Option<PathBuf>,
    #[serde(default)]
    pub evaluations: Option<PathBuf>,
    #[serde(default)]
    pub clusters: Option<PathBuf>,
    #[serde(default)]
    pub criteria: Option<PathBuf>,
}

impl MergeConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as unit, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a file; relative paths inside it resolve
    /// against the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let yaml = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => config_not_found(&display),
            _ => config_read_failed(&display, e.to_string()),
        })?;

        let config = Self::from_yaml(&yaml).map_err(|e| match e {
            MergeError::ConfigParseFailed { reason, .. } => config_parse_failed(&display, reason),
            other => other,
        })?;
        let base = path.parent().unwrap_or(Path::new(""));
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config.relative_to(base))
    }

    fn relative_to(self, base: &Path) -> Self {
        let join = |p: Option<PathBuf>| p.map(|p| base.join(p));
        Self {
            indir: join(self.indir),
            dataset: self.dataset,
            out: join(self.out),
            inputs: InputFiles {
                pairs: join(self.inputs.pairs),
                evaluations: join(self.inputs.evaluations),
                clusters: join(self.inputs.clusters),
                criteria: join(self.inputs.criteria),
            },
        }
    }

    /// Layer `overrides` on top of this configuration
    pub fn overridden_by(self, overrides: MergeConfig) -> Self {
        Self {
            indir: overrides.indir.or(self.indir),
            dataset: overrides.dataset.or(self.dataset),
            out: overrides.out.or(self.out),
            inputs: InputFiles {
                pairs: overrides.inputs.pairs.or(self.inputs.pairs),
                evaluations: overrides.inputs.evaluations.or(self.inputs.evaluations),
                clusters: overrides.inputs.clusters.or(self.inputs.clusters),
                criteria: overrides.inputs.criteria.or(self.inputs.criteria),
            },
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn input_sources(&self) -> InputSources {
        InputSources {
            indir: self.indir.clone(),
            dataset: self.dataset.clone(),
            pairs: self.inputs.pairs.clone(),
            evaluations: self.inputs.evaluations.clone(),
            clusters: self.inputs.clusters.clone(),
            criteria: self.inputs.criteria.clone(),
        }
    }
}
