//! Input record types
//!
//! One struct per exported document kind. Unknown keys are ignored; required
//! keys are enforced by serde so a missing field fails the load.

use serde::Deserialize;

use super::id::{self, RecordId};
use super::text;

/// A query/response exchange (`pairData (...).json`)
#[derive(Debug, Clone, Deserialize)]
pub struct PairRecord {
    pub id: RecordId,

    #[serde(deserialize_with = "text::nullable_text")]
    pub query: Option<String>,

    #[serde(deserialize_with = "text::nullable_text")]
    pub response: Option<String>,
}

/// A set of behavior judgments attached to one pair (`evaluation (...).json`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    /// Foreign key into [`PairRecord::id`]
    pub pair_data_id: RecordId,

    #[serde(default, deserialize_with = "text::null_as_default")]
    pub behaviors: Vec<BehaviorRecord>,
}

/// A single labeled observation about a pair
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorRecord {
    pub id: RecordId,

    #[serde(deserialize_with = "text::nullable_text")]
    pub behavior: Option<String>,

    #[serde(deserialize_with = "text::nullable_text")]
    pub feature: Option<String>,

    #[serde(deserialize_with = "text::nullable_text")]
    pub reasoning: Option<String>,

    #[serde(deserialize_with = "text::truthy")]
    pub is_positive: bool,

    /// Foreign key into [`ClusterRecord::id`]
    #[serde(default, deserialize_with = "id::optional_id")]
    pub cluster_id: Option<RecordId>,
}

/// A named grouping of behaviors (`cluster (...).json`)
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterRecord {
    pub id: RecordId,
    pub name: String,
}
