//! Output record types

use serde::Serialize;

use super::text::compact;
use super::{BehaviorRecord, PairRecord};

/// One denormalized pair with its deduplicated behaviors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    /// 1-based position in the output, not the source identifier
    pub pid: usize,
    pub query: String,
    pub response: String,
    pub behaviors: Vec<OutputBehavior>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputBehavior {
    pub behavior: String,
    pub feature: String,
    pub reasoning: String,
    pub is_positive: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

impl OutputRecord {
    /// Start a record for `pair` at position `pid`, with no behaviors yet
    pub fn from_pair(pid: usize, pair: &PairRecord) -> Self {
        Self {
            pid,
            query: compact(pair.query.as_deref()),
            response: compact(pair.response.as_deref()),
            behaviors: Vec::new(),
        }
    }
}

impl OutputBehavior {
    pub fn from_record(record: &BehaviorRecord, cluster_name: Option<&str>) -> Self {
        Self {
            behavior: compact(record.behavior.as_deref()),
            feature: compact(record.feature.as_deref()),
            reasoning: compact(record.reasoning.as_deref()),
            is_positive: record.is_positive,
            cluster_name: cluster_name.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_name_is_omitted_when_absent() {
        let behavior = OutputBehavior {
            behavior: "greet".to_string(),
            feature: "tone".to_string(),
            reasoning: "polite".to_string(),
            is_positive: false,
            cluster_name: None,
        };
        let value = serde_json::to_value(&behavior).unwrap();
        assert_eq!(
            value,
            json!({"behavior": "greet", "feature": "tone", "reasoning": "polite", "isPositive": false})
        );
    }

    #[test]
    fn test_record_field_names() {
        let record = OutputRecord {
            pid: 3,
            query: "q".to_string(),
            response: "r".to_string(),
            behaviors: vec![OutputBehavior {
                behavior: "b".to_string(),
                feature: "f".to_string(),
                reasoning: "r".to_string(),
                is_positive: true,
                cluster_name: Some("Politeness".to_string()),
            }],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["pid"], 3);
        assert_eq!(value["behaviors"][0]["isPositive"], true);
        assert_eq!(value["behaviors"][0]["clusterName"], "Politeness");
    }

    #[test]
    fn test_from_pair_trims_and_defaults() {
        let pair = PairRecord {
            id: "p1".into(),
            query: Some("  hi  ".to_string()),
            response: None,
        };
        let record = OutputRecord::from_pair(1, &pair);
        assert_eq!(record.query, "hi");
        assert_eq!(record.response, "");
        assert!(record.behaviors.is_empty());
    }
}
