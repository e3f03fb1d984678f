//! Suggestion for a spelling correction.
use crate::types::Frequency;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Suggestion for a spelling correction
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// dictionary frequency of the word-form
    pub frequency: Frequency,
}

impl Suggestion {
    /// creates a spelling correction suggestion
    pub fn new(value: SmolStr, frequency: Frequency) -> Suggestion {
        Suggestion { value, frequency }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the dictionary frequency of the suggestion
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// More frequent suggestions sort first; equal frequencies fall back to the
/// word-form so that sorting is stable across runs.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.value.cmp(&other.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_descending_frequency() {
        let mut s = vec![
            Suggestion::new("bat".into(), 10),
            Suggestion::new("cat".into(), 100),
            Suggestion::new("act".into(), 10),
        ];
        s.sort();

        let values: Vec<&str> = s.iter().map(Suggestion::value).collect();
        assert_eq!(values, vec!["cat", "act", "bat"]);
    }

    #[test]
    fn serializes_value_and_frequency() {
        let json = serde_json::to_string(&Suggestion::new("cat".into(), 100)).unwrap();
        assert_eq!(json, r#"{"value":"cat","frequency":100}"#);
    }
}
