//! Record identifiers
//!
//! Exports normally carry string ids, but numeric ids are accepted too. The
//! two forms stay distinct keys: `1` and `"1"` never join.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Primary or foreign key of an exported record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(Number),
}

impl RecordId {
    pub fn is_empty(&self) -> bool {
        matches!(self, RecordId::Text(text) if text.is_empty())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(text) => f.write_str(text),
            RecordId::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for RecordId {
    fn from(text: &str) -> Self {
        RecordId::Text(text.to_string())
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, RecordId::Text(text) if text.as_str() == *other)
    }
}

/// Deserialize an optional reference, treating `null` and `""` as absent
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RecordId>::deserialize(deserializer)?;
    Ok(value.filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_and_numeric_ids() {
        let text: RecordId = serde_json::from_value(json!("p1")).unwrap();
        let number: RecordId = serde_json::from_value(json!(42)).unwrap();

        assert_eq!(text, "p1");
        assert_eq!(number.to_string(), "42");
        assert!(matches!(number, RecordId::Number(_)));
    }

    #[test]
    fn test_numeric_and_text_forms_differ() {
        let number: RecordId = serde_json::from_value(json!(1)).unwrap();
        let text: RecordId = serde_json::from_value(json!("1")).unwrap();
        assert_ne!(number, text);
    }

    #[test]
    fn test_other_types_are_rejected() {
        assert!(serde_json::from_value::<RecordId>(json!(true)).is_err());
        assert!(serde_json::from_value::<RecordId>(json!({"id": 1})).is_err());
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(RecordId::from("").is_empty());
        assert!(!RecordId::from("c1").is_empty());
    }
}
