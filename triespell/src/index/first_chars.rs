use hashbrown::{HashMap, HashSet};

/// Maps a second character to every first character seen before it.
///
/// `get('a')` on a dictionary holding "cat" and "bat" yields `{'c', 'b'}`.
/// Used to propose replacements and insertions at position 0 without walking
/// the whole alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentFirstChars {
    map: HashMap<char, HashSet<char>>,
}

impl AdjacentFirstChars {
    pub fn new() -> AdjacentFirstChars {
        AdjacentFirstChars::default()
    }

    /// Records the first two characters of `word`. Shorter words are ignored.
    pub fn record(&mut self, word: &str) {
        let mut chars = word.chars();

        if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
            self.map.entry(second).or_default().insert(first);
        }
    }

    #[inline(always)]
    pub fn get(&self, second: char) -> Option<&HashSet<char>> {
        self.map.get(&second)
    }

    #[inline(always)]
    pub fn contains_key(&self, second: char) -> bool {
        self.map.contains_key(&second)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_leading_pairs() {
        let mut firsts = AdjacentFirstChars::new();
        for word in &["cat", "bat", "at", "a", "", "ox"] {
            firsts.record(word);
        }

        let a = firsts.get('a').unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.contains(&'c') && a.contains(&'b'));

        assert!(firsts.get('t').unwrap().contains(&'a'));
        assert!(firsts.get('x').unwrap().contains(&'o'));
        assert!(firsts.get('c').is_none());
        assert_eq!(firsts.len(), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut firsts = AdjacentFirstChars::new();
        firsts.record("ñandú");

        assert!(firsts.get('a').unwrap().contains(&'ñ'));
        assert!(!firsts.contains_key('n'));
    }
}
