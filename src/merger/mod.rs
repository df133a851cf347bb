//! Join pairs, evaluations and clusters into output records
//!
//! The merge is a single pass:
//! 1. index cluster names by cluster id
//! 2. bucket behaviors by the pair they evaluate, in input order
//! 3. walk the pairs in input order, numbering them from 1 and attaching
//!    each pair's behaviors, first occurrence of a behavior id wins

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::dataset::Dataset;
use crate::domain::{
    BehaviorRecord, ClusterRecord, EvaluationRecord, OutputBehavior, OutputRecord, PairRecord,
    RecordId,
};

/// Counters collected while merging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub pairs: usize,
    pub behaviors: usize,
    /// Behaviors dropped because their id was already emitted for the pair
    pub duplicate_behaviors: usize,
    /// Behaviors whose cluster id matched no cluster
    pub unresolved_clusters: usize,
    /// Pairs no evaluation refers to
    pub pairs_without_evaluations: usize,
    /// Evaluations referring to a pair id not present in the pair data
    pub orphan_evaluations: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub records: Vec<OutputRecord>,
    pub stats: MergeStats,
}

/// Lookup indices built once from evaluations and clusters
pub struct Merger<'a> {
    cluster_names: HashMap<&'a RecordId, &'a str>,
    behaviors_by_pair: HashMap<&'a RecordId, Vec<&'a BehaviorRecord>>,
    evaluations: &'a [EvaluationRecord],
}

impl<'a> Merger<'a> {
    pub fn new(evaluations: &'a [EvaluationRecord], clusters: &'a [ClusterRecord]) -> Self {
        // Duplicate cluster ids: last one wins
        let cluster_names: HashMap<&RecordId, &str> = clusters
            .iter()
            .map(|c| (&c.id, c.name.as_str()))
            .collect();

        let mut behaviors_by_pair: HashMap<&RecordId, Vec<&BehaviorRecord>> = HashMap::new();
        for evaluation in evaluations {
            behaviors_by_pair
                .entry(&evaluation.pair_data_id)
                .or_default()
                .extend(evaluation.behaviors.iter());
        }

        debug!(
            clusters = cluster_names.len(),
            evaluated_pairs = behaviors_by_pair.len(),
            "Built merge indices"
        );

        Self {
            cluster_names,
            behaviors_by_pair,
            evaluations,
        }
    }

    pub fn cluster_name(&self, cluster_id: &RecordId) -> Option<&'a str> {
        self.cluster_names.get(cluster_id).copied()
    }

    /// Behaviors recorded for a pair, duplicates included
    pub fn behaviors_for(&self, pair_id: &RecordId) -> &[&'a BehaviorRecord] {
        self.behaviors_by_pair
            .get(pair_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn merge(&self, pairs: &[PairRecord]) -> MergeOutcome {
        let mut stats = MergeStats {
            pairs: pairs.len(),
            ..MergeStats::default()
        };
        let mut records = Vec::with_capacity(pairs.len());

        for (index, pair) in pairs.iter().enumerate() {
            let mut record = OutputRecord::from_pair(index + 1, pair);

            if !self.behaviors_by_pair.contains_key(&pair.id) {
                stats.pairs_without_evaluations += 1;
            }
            let bucket = self.behaviors_for(&pair.id);

            let mut seen: HashSet<&RecordId> = HashSet::with_capacity(bucket.len());
            for behavior in bucket {
                if !seen.insert(&behavior.id) {
                    trace!(pair = %pair.id, behavior = %behavior.id, "Dropping duplicate behavior");
                    stats.duplicate_behaviors += 1;
                    continue;
                }

                let cluster_name = match behavior.cluster_id.as_ref() {
                    Some(cluster_id) => {
                        let name = self.cluster_name(cluster_id);
                        if name.is_none() {
                            stats.unresolved_clusters += 1;
                        }
                        name
                    }
                    None => None,
                };

                record
                    .behaviors
                    .push(OutputBehavior::from_record(behavior, cluster_name));
            }

            stats.behaviors += record.behaviors.len();
            records.push(record);
        }

        let pair_ids: HashSet<&RecordId> = pairs.iter().map(|p| &p.id).collect();
        stats.orphan_evaluations = self
            .evaluations
            .iter()
            .filter(|e| !pair_ids.contains(&e.pair_data_id))
            .count();

        debug!(
            pairs = stats.pairs,
            behaviors = stats.behaviors,
            duplicates = stats.duplicate_behaviors,
            unresolved_clusters = stats.unresolved_clusters,
            "Merged records"
        );

        MergeOutcome { records, stats }
    }
}

/// Merge a loaded dataset
pub fn merge(dataset: &Dataset) -> MergeOutcome {
    Merger::new(&dataset.evaluations, &dataset.clusters).merge(&dataset.pairs)
}
