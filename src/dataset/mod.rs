//! Input dataset: locating the exported files and loading them
//!
//! An export consists of files named `<prefix> (<tag>).json`, e.g.
//! `pairData (eng_dapie).json`. Three of them feed the merge; the criteria
//! file is located when present but never read.

pub mod discovery;
pub mod loader;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{ClusterRecord, EvaluationRecord, PairRecord};
use crate::error::Result;

/// The kinds of file an export contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pairs,
    Evaluations,
    Clusters,
    Criteria,
}

impl InputKind {
    /// File name prefix used by the export
    pub fn prefix(self) -> &'static str {
        match self {
            InputKind::Pairs => "pairData",
            InputKind::Evaluations => "evaluation",
            InputKind::Clusters => "cluster",
            InputKind::Criteria => "criteria",
        }
    }

    /// Exact file name for a dataset tag
    pub fn file_name(self, tag: &str) -> String {
        format!("{} ({}).json", self.prefix(), tag)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputKind::Pairs => "pairs",
            InputKind::Evaluations => "evaluations",
            InputKind::Clusters => "clusters",
            InputKind::Criteria => "criteria",
        };
        f.write_str(label)
    }
}

/// Resolved paths of every input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub pairs: PathBuf,
    pub evaluations: PathBuf,
    pub clusters: PathBuf,
    /// Present in the export but not consumed by the merge
    pub criteria: Option<PathBuf>,
}

/// Where to look for inputs, before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSources {
    pub indir: Option<PathBuf>,
    pub dataset: Option<String>,
    pub pairs: Option<PathBuf>,
    pub evaluations: Option<PathBuf>,
    pub clusters: Option<PathBuf>,
    pub criteria: Option<PathBuf>,
}

impl InputSources {
    /// Resolve every input path, explicit paths first, then discovery
    pub fn resolve(&self) -> Result<InputPaths> {
        let indir = self.indir.as_deref().unwrap_or(Path::new("."));
        let tag = self.dataset.as_deref();

        let locate = |explicit: &Option<PathBuf>, kind: InputKind| -> Result<PathBuf> {
            match explicit {
                Some(path) => Ok(path.clone()),
                None => discovery::locate(indir, kind, tag),
            }
        };

        let paths = InputPaths {
            pairs: locate(&self.pairs, InputKind::Pairs)?,
            evaluations: locate(&self.evaluations, InputKind::Evaluations)?,
            clusters: locate(&self.clusters, InputKind::Clusters)?,
            criteria: match &self.criteria {
                Some(path) => Some(path.clone()),
                None => discovery::locate_optional(indir, InputKind::Criteria, tag),
            },
        };

        debug!(?paths, "Resolved input paths");
        Ok(paths)
    }
}

/// The three record collections the merge consumes
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pairs: Vec<PairRecord>,
    pub evaluations: Vec<EvaluationRecord>,
    pub clusters: Vec<ClusterRecord>,
}

impl Dataset {
    /// Load every input file; fails on the first unreadable or invalid file
    pub fn load(paths: &InputPaths) -> Result<Self> {
        let pairs = loader::load_records(&paths.pairs)?;
        let evaluations = loader::load_records(&paths.evaluations)?;
        let clusters = loader::load_records(&paths.clusters)?;

        if let Some(criteria) = &paths.criteria {
            debug!(path = %criteria.display(), "Criteria file present, not consumed");
        }

        let dataset = Self {
            pairs,
            evaluations,
            clusters,
        };
        info!(
            pairs = dataset.pairs.len(),
            evaluations = dataset.evaluations.len(),
            clusters = dataset.clusters.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_input_kind_file_name() {
        assert_eq!(
            InputKind::Pairs.file_name("eng_dapie"),
            "pairData (eng_dapie).json"
        );
        assert_eq!(
            InputKind::Evaluations.file_name("x"),
            "evaluation (x).json"
        );
        assert_eq!(InputKind::Clusters.to_string(), "clusters");
    }

    #[test]
    fn test_resolve_by_discovery() {
        let temp = TempDir::new().unwrap();
        for name in [
            "pairData (horror keyword).json",
            "evaluation (horror keyword).json",
            "cluster (horror keyword).json",
            "criteria (horror keyword).json",
        ] {
            write(temp.path(), name, "[]");
        }

        let sources = InputSources {
            indir: Some(temp.path().to_path_buf()),
            ..InputSources::default()
        };
        let paths = sources.resolve().unwrap();

        assert_eq!(
            paths.pairs,
            temp.path().join("pairData (horror keyword).json")
        );
        assert_eq!(
            paths.criteria,
            Some(temp.path().join("criteria (horror keyword).json"))
        );
    }

    #[test]
    fn test_explicit_paths_override_discovery() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "evaluation (a).json", "[]");
        write(temp.path(), "cluster (a).json", "[]");

        let sources = InputSources {
            indir: Some(temp.path().to_path_buf()),
            pairs: Some(PathBuf::from("elsewhere/pairs.json")),
            ..InputSources::default()
        };
        let paths = sources.resolve().unwrap();

        assert_eq!(paths.pairs, PathBuf::from("elsewhere/pairs.json"));
        assert_eq!(paths.evaluations, temp.path().join("evaluation (a).json"));
        assert_eq!(paths.criteria, None);
    }

    #[test]
    fn test_load_dataset() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "pairs.json",
            r#"[{"id": "p1", "query": "q", "response": "r"}]"#,
        );
        write(
            temp.path(),
            "evals.json",
            r#"[{"pairDataId": "p1", "behaviors": []}]"#,
        );
        write(
            temp.path(),
            "clusters.json",
            r#"[{"id": "c1", "name": "C"}]"#,
        );

        let paths = InputPaths {
            pairs: temp.path().join("pairs.json"),
            evaluations: temp.path().join("evals.json"),
            clusters: temp.path().join("clusters.json"),
            criteria: None,
        };
        let dataset = Dataset::load(&paths).unwrap();

        assert_eq!(dataset.pairs.len(), 1);
        assert_eq!(dataset.evaluations.len(), 1);
        assert_eq!(dataset.clusters[0].name, "C");
    }
}
