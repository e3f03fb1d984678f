//! Frequency dictionaries consulted by the speller.
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::types::Frequency;

pub mod error;

use self::error::DictionaryError;

/// Read-only source of known words and their frequencies.
///
/// The speller snapshots [`Dictionary::entries`] once when it is built and
/// afterwards only asks membership and frequency questions.
pub trait Dictionary: Send + Sync {
    /// All `(word, frequency)` pairs, including non-positive ones.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Frequency)> + '_>;

    /// Frequency of `word`, or 0 if it is absent.
    fn frequency_of(&self, word: &str) -> Frequency;

    /// Whether `word` is a known word, i.e. has a positive frequency.
    #[inline]
    fn contains_word(&self, word: &str) -> bool {
        self.frequency_of(word) > 0
    }
}

/// Hash-map backed [`Dictionary`].
#[derive(Debug, Default, Clone)]
pub struct MemoryDictionary {
    words: HashMap<SmolStr, Frequency>,
}

impl MemoryDictionary {
    pub fn new() -> MemoryDictionary {
        MemoryDictionary::default()
    }

    /// Sets the frequency of `word`, replacing any previous value.
    pub fn insert(&mut self, word: impl Into<SmolStr>, frequency: Frequency) {
        self.words.insert(word.into(), frequency);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all positive frequencies.
    pub fn total_frequency(&self) -> Frequency {
        self.words.values().filter(|f| **f > 0).sum()
    }

    /// Loads a dictionary file with one `word freq [tag]` entry per line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MemoryDictionary, DictionaryError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| DictionaryError::Io(path.to_string_lossy().to_string(), e))?;

        let dict = Self::read(BufReader::new(file), &path.to_string_lossy())?;
        log::debug!("loaded {} entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Reads `word freq [tag]` lines. Blank lines and lines starting with `#`
    /// are skipped, the tag column is ignored and later duplicates win.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<MemoryDictionary, DictionaryError> {
        Self::read(reader, "<reader>")
    }

    fn read<R: BufRead>(reader: R, name: &str) -> Result<MemoryDictionary, DictionaryError> {
        let mut dict = MemoryDictionary::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| DictionaryError::Io(name.to_string(), e))?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(v) => v,
                None => continue,
            };

            let frequency = match fields.next() {
                Some(v) => v.parse::<Frequency>().map_err(|e| DictionaryError::Parse {
                    line: index + 1,
                    reason: format!("bad frequency {:?}: {}", v, e),
                })?,
                None => {
                    return Err(DictionaryError::Parse {
                        line: index + 1,
                        reason: format!("missing frequency for {:?}", word),
                    })
                }
            };

            dict.insert(word, frequency);
        }

        Ok(dict)
    }
}

impl Dictionary for MemoryDictionary {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Frequency)> + '_> {
        Box::new(self.words.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    #[inline]
    fn frequency_of(&self, word: &str) -> Frequency {
        self.words.get(word).copied().unwrap_or(0)
    }
}

impl<S: Into<SmolStr>> FromIterator<(S, Frequency)> for MemoryDictionary {
    fn from_iter<I: IntoIterator<Item = (S, Frequency)>>(iter: I) -> Self {
        let mut dict = MemoryDictionary::new();
        for (word, frequency) in iter {
            dict.insert(word, frequency);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn frequency_defaults_to_zero() {
        let dict: MemoryDictionary = vec![("cat", 100), ("dog", 0), ("eel", -3)]
            .into_iter()
            .collect();

        assert_eq!(dict.frequency_of("cat"), 100);
        assert_eq!(dict.frequency_of("cow"), 0);
        assert!(dict.contains_word("cat"));
        assert!(!dict.contains_word("dog"));
        assert!(!dict.contains_word("eel"));
        assert!(!dict.contains_word("cow"));
        assert_eq!(dict.total_frequency(), 100);
        assert_eq!(dict.entries().count(), 3);
    }

    #[test]
    fn reads_word_freq_tag_lines() {
        let input = "# comment\n\ncat 100 n\ncats 50\n  bat\t10\tn  \ncat 7 n\n";
        let dict = MemoryDictionary::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.frequency_of("cat"), 7);
        assert_eq!(dict.frequency_of("cats"), 50);
        assert_eq!(dict.frequency_of("bat"), 10);
    }

    #[test]
    fn reports_line_of_bad_frequency() {
        let input = "cat 100\ndog many\n";
        match MemoryDictionary::from_reader(Cursor::new(input)) {
            Err(DictionaryError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }

        match MemoryDictionary::from_reader(Cursor::new("# head\ncat\n")) {
            Err(DictionaryError::Parse { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("missing frequency"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn opens_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello 12 v").unwrap();
        writeln!(file, "world 3").unwrap();
        file.flush().unwrap();

        let dict = MemoryDictionary::open(file.path()).unwrap();
        assert_eq!(dict.frequency_of("hello"), 12);
        assert_eq!(dict.frequency_of("world"), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemoryDictionary::open(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io(..)));
    }
}
