use std::sync::Arc;

use parking_lot::RwLock;

use super::{Speller, SpellerConfig, TrieSpeller};
use crate::dictionary::Dictionary;
use crate::speller::suggestion::Suggestion;

/// Shared reference to the current speller, replaced wholesale when the
/// dictionary changes.
///
/// Lookups clone the inner `Arc` and run without holding the lock, so a
/// rebuild never blocks on, or is observed halfway by, a running lookup.
pub struct SpellerHandle<D: Dictionary> {
    current: RwLock<Arc<TrieSpeller<D>>>,
}

impl<D: Dictionary> SpellerHandle<D> {
    pub fn new(dictionary: Arc<D>) -> SpellerHandle<D> {
        SpellerHandle {
            current: RwLock::new(Arc::new(TrieSpeller::new(dictionary))),
        }
    }

    /// The speller serving lookups right now.
    pub fn current(&self) -> Arc<TrieSpeller<D>> {
        Arc::clone(&self.current.read())
    }

    /// Builds a speller for `dictionary` and swaps it in.
    pub fn rebuild(&self, dictionary: Arc<D>) {
        let speller = Arc::new(TrieSpeller::new(dictionary));
        log::debug!("swapping in speller with {} words", speller.index().len());
        *self.current.write() = speller;
    }
}

impl<D: Dictionary> Speller for SpellerHandle<D> {
    fn is_correct(&self, word: &str) -> bool {
        self.current().is_correct(word)
    }

    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        self.current().suggest_with_config(word, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryDictionary;

    fn dict(words: &[(&str, i64)]) -> Arc<MemoryDictionary> {
        Arc::new(words.iter().copied().collect())
    }

    #[test]
    fn rebuild_swaps_for_later_lookups() {
        let handle = SpellerHandle::new(dict(&[("cat", 1)]));
        let old = handle.current();

        assert_eq!(handle.suggest_words("cot"), vec!["cat"]);

        handle.rebuild(dict(&[("dog", 1)]));

        assert!(handle.is_correct("dog"));
        assert!(!handle.is_correct("cat"));
        assert_eq!(handle.suggest_words("dug"), vec!["dog"]);

        assert!(old.is_correct("cat"));
        assert!(!old.is_correct("dog"));
    }

    #[test]
    fn readers_on_other_threads() {
        let handle = Arc::new(SpellerHandle::new(dict(&[("cat", 1)])));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || handle.suggest_words("cta"))
            })
            .collect();

        for w in workers {
            assert_eq!(w.join().unwrap(), vec!["cat"]);
        }
    }
}
