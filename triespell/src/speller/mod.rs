use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use self::error::ConfigError;
use self::worker::SpellerWorker;
use crate::dictionary::Dictionary;
use crate::index::{AdjacentFirstChars, PrefixIndex};
use crate::speller::suggestion::Suggestion;

pub mod error;
mod handle;
pub mod suggestion;
mod worker;

pub use self::handle::SpellerHandle;

/// How far from the input a suggestion may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditDistance {
    /// Stop after the first round of edits.
    One,
    /// Fall back to a second round when the first finds nothing.
    Two,
}

impl FromStr for EditDistance {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "one" => Ok(EditDistance::One),
            "2" | "two" => Ok(EditDistance::Two),
            _ => Err(ConfigError::EditDistance(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    pub n_best: Option<usize>,
    pub max_edit_distance: EditDistance,
}

impl SpellerConfig {
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: None,
            max_edit_distance: EditDistance::Two,
        }
    }

    /// Reads a JSON config; missing fields keep their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<SpellerConfig, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

pub trait Speller {
    fn is_correct(&self, word: &str) -> bool;
    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;

    #[inline]
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    /// Ranked suggestion values without their frequencies.
    fn suggest_words(&self, word: &str) -> Vec<String> {
        self.suggest(word)
            .into_iter()
            .map(|s| s.value.to_string())
            .collect_vec()
    }
}

/// Speller over a prefix index built from a [`Dictionary`] snapshot.
///
/// Construction walks the dictionary once; afterwards the speller is
/// read-only and can be shared between threads.
#[derive(Debug)]
pub struct TrieSpeller<D: Dictionary> {
    dictionary: Arc<D>,
    index: PrefixIndex,
    first_chars: AdjacentFirstChars,
}

impl<D: Dictionary> TrieSpeller<D> {
    pub fn new(dictionary: Arc<D>) -> TrieSpeller<D> {
        let (index, first_chars) = PrefixIndex::build(&*dictionary);

        TrieSpeller {
            dictionary,
            index,
            first_chars,
        }
    }

    pub fn dictionary(&self) -> &Arc<D> {
        &self.dictionary
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn first_chars(&self) -> &AdjacentFirstChars {
        &self.first_chars
    }
}

impl<D: Dictionary> Speller for TrieSpeller<D> {
    #[inline]
    fn is_correct(&self, word: &str) -> bool {
        SpellerWorker::new(self, word, &SpellerConfig::default()).is_correct()
    }

    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        SpellerWorker::new(self, word, config).suggest()
    }
}
