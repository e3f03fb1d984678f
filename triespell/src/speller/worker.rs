use hashbrown::HashSet;
use smol_str::SmolStr;

use super::{EditDistance, SpellerConfig, TrieSpeller};
use crate::dictionary::Dictionary;
use crate::speller::suggestion::Suggestion;

#[inline(always)]
fn splice(left: &[char], mid: &[char], right: &[char]) -> SmolStr {
    left.iter()
        .chain(mid.iter())
        .chain(right.iter())
        .collect::<String>()
        .into()
}

/// Runs one lookup against a built speller.
pub(crate) struct SpellerWorker<'s, D: Dictionary> {
    speller: &'s TrieSpeller<D>,
    input: Vec<char>,
    config: &'s SpellerConfig,
}

impl<'s, D: Dictionary> SpellerWorker<'s, D> {
    #[inline(always)]
    pub(crate) fn new(
        speller: &'s TrieSpeller<D>,
        input: &str,
        config: &'s SpellerConfig,
    ) -> SpellerWorker<'s, D> {
        SpellerWorker {
            speller,
            input: input.chars().collect(),
            config,
        }
    }

    /// Deletions, adjacent transpositions and the trie-guided replacements
    /// and insertions of `word`.
    pub(crate) fn edits1(&self, word: &[char]) -> HashSet<SmolStr> {
        let mut out = HashSet::new();

        self.deletes(word, &mut out);
        self.transposes(word, &mut out);

        if word.len() > 1 {
            self.replaces(word, &mut out);
            self.inserts(word, &mut out);
        }

        out
    }

    fn deletes(&self, word: &[char], out: &mut HashSet<SmolStr>) {
        for i in 0..word.len() {
            out.insert(splice(&word[..i], &[], &word[i + 1..]));
        }
    }

    fn transposes(&self, word: &[char], out: &mut HashSet<SmolStr>) {
        for i in 0..word.len().saturating_sub(1) {
            out.insert(splice(&word[..i], &[word[i + 1], word[i]], &word[i + 2..]));
        }
    }

    fn replaces(&self, word: &[char], out: &mut HashSet<SmolStr>) {
        let firsts = &self.speller.first_chars;

        if let Some(chars) = firsts.get(word[1]) {
            for &ch in chars.iter().filter(|&&ch| ch != word[0]) {
                out.insert(splice(&[], &[ch], &word[1..]));
            }
        }

        // Only the subtree under the original first character is explored.
        let mut node = self.speller.index.root().child(word[0]);
        let mut i = 1;

        while let Some(current) = node {
            if i >= word.len() || !current.has_children() {
                break;
            }

            for ch in current.children() {
                out.insert(splice(&word[..i], &[ch], &word[i + 1..]));
            }

            node = current.child(word[i]);
            i += 1;
        }
    }

    fn inserts(&self, word: &[char], out: &mut HashSet<SmolStr>) {
        let firsts = &self.speller.first_chars;

        if let Some(chars) = firsts.get(word[0]) {
            for &ch in chars.iter() {
                out.insert(splice(&[], &[ch], word));
            }
        }

        let mut node = self.speller.index.root().child(word[0]);
        let mut i = 0;

        while let Some(current) = node {
            if i >= word.len() || !current.has_children() {
                break;
            }

            for ch in current.children() {
                out.insert(splice(&word[..=i], &[ch], &word[i + 1..]));
            }

            if i + 1 < word.len() {
                node = current.child(word[i + 1]);
            }
            i += 1;
        }
    }

    fn known<'a, I>(&self, candidates: I) -> HashSet<SmolStr>
    where
        I: IntoIterator<Item = &'a SmolStr>,
    {
        let dictionary = &self.speller.dictionary;

        candidates
            .into_iter()
            .filter(|w| dictionary.contains_word(w))
            .cloned()
            .collect()
    }

    /// Known words reachable by applying [`Self::edits1`] twice.
    pub(crate) fn known_edits2(&self, edits: &HashSet<SmolStr>) -> HashSet<SmolStr> {
        let mut out = HashSet::new();

        for e1 in edits.iter() {
            let chars = e1.chars().collect::<Vec<_>>();
            out.extend(self.known(self.edits1(&chars).iter()));
        }

        out
    }

    pub(crate) fn is_correct(&self) -> bool {
        let word: String = self.input.iter().collect();
        self.speller.dictionary.contains_word(&word)
    }

    pub(crate) fn suggest(&self) -> Vec<Suggestion> {
        log::trace!("Beginning suggest");

        let word: SmolStr = self.input.iter().collect::<String>().into();

        if self.speller.dictionary.contains_word(&word) {
            let frequency = self.speller.dictionary.frequency_of(&word);
            return vec![Suggestion::new(word, frequency)];
        }

        let edits = self.edits1(&self.input);
        log::trace!("{}: {} candidates at distance 1", word, edits.len());

        let known = self.known(edits.iter());
        if !known.is_empty() {
            log::debug!("{}: {} known words at distance 1", word, known.len());
            return self.generate_sorted_suggestions(known);
        }

        if self.config.max_edit_distance == EditDistance::One {
            return vec![];
        }

        let known = self.known_edits2(&edits);
        log::debug!("{}: {} known words at distance 2", word, known.len());
        self.generate_sorted_suggestions(known)
    }

    fn generate_sorted_suggestions(&self, words: HashSet<SmolStr>) -> Vec<Suggestion> {
        let dictionary = &self.speller.dictionary;

        let mut c: Vec<Suggestion> = words
            .into_iter()
            .map(|w| {
                let frequency = dictionary.frequency_of(&w);
                Suggestion::new(w, frequency)
            })
            .collect();

        c.sort();

        if let Some(n) = self.config.n_best {
            c.truncate(n);
        }

        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryDictionary;
    use std::sync::Arc;

    fn speller() -> TrieSpeller<MemoryDictionary> {
        let dict: MemoryDictionary = vec![("cat", 100), ("cats", 50), ("bat", 10)]
            .into_iter()
            .collect();
        TrieSpeller::new(Arc::new(dict))
    }

    fn edits(speller: &TrieSpeller<MemoryDictionary>, word: &str) -> HashSet<SmolStr> {
        let config = SpellerConfig::default();
        let worker = SpellerWorker::new(speller, word, &config);
        worker.edits1(&worker.input)
    }

    fn set(words: &[&str]) -> HashSet<SmolStr> {
        words.iter().map(|w| SmolStr::new(w)).collect()
    }

    #[test]
    fn edits1_follows_trie() {
        let s = speller();
        assert_eq!(
            edits(&s, "cot"),
            set(&["ot", "ct", "co", "oct", "cto", "cat", "caot"])
        );
    }

    #[test]
    fn edits1_replaces_first_char_from_adjacency() {
        let s = speller();
        let e = edits(&s, "hat");

        assert!(e.contains("cat"));
        assert!(e.contains("bat"));
        assert!(!e.contains("hat"));
    }

    #[test]
    fn edits1_prepends_from_adjacency() {
        let dict: MemoryDictionary = vec![("scat", 5)].into_iter().collect();
        let s = TrieSpeller::new(Arc::new(dict));

        // "c" is seen after "s", so "s" may be prepended to a word starting with "c".
        assert!(edits(&s, "cat").contains("scat"));
        assert!(!edits(&s, "at").contains("sat"));
    }

    #[test]
    fn edits1_includes_identity_replacement() {
        let s = speller();
        assert!(edits(&s, "cat").contains("cat"));
    }

    #[test]
    fn edits1_appends_at_end() {
        let s = speller();
        assert!(edits(&s, "cat").contains("cats"));
    }

    #[test]
    fn short_words_only_delete() {
        let s = speller();
        assert_eq!(edits(&s, "c"), set(&[""]));
        assert!(edits(&s, "").is_empty());
    }

    #[test]
    fn known_edits2_filters_to_dictionary() {
        let s = speller();
        let config = SpellerConfig::default();
        let worker = SpellerWorker::new(&s, "caxx", &config);
        let e1 = worker.edits1(&worker.input);

        assert!(worker.known(e1.iter()).is_empty());
        assert_eq!(worker.known_edits2(&e1), set(&["cat", "cats"]));
    }
}
