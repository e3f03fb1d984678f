//! Prefix index over the dictionary.
//!
//! The index is a character trie whose terminal nodes carry the word
//! frequency. It is built once from a [`Dictionary`] snapshot and never
//! mutated afterwards; a changed dictionary means a new index.
mod first_chars;
pub mod tree_node;

pub use self::first_chars::AdjacentFirstChars;
pub use self::tree_node::TreeNode;

use crate::dictionary::Dictionary;
use crate::types::Frequency;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    root: TreeNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> PrefixIndex {
        PrefixIndex::default()
    }

    /// Builds the index and the first-character adjacency from every entry
    /// of `dictionary` with a positive frequency.
    pub fn build<D: Dictionary + ?Sized>(dictionary: &D) -> (PrefixIndex, AdjacentFirstChars) {
        let mut index = PrefixIndex::new();
        let mut firsts = AdjacentFirstChars::new();

        for (word, frequency) in dictionary.entries() {
            if frequency <= 0 {
                continue;
            }

            index.insert(word, frequency);
            firsts.record(word);
        }

        log::debug!(
            "indexed {} words, {} second characters",
            index.len(),
            firsts.len()
        );

        (index, firsts)
    }

    /// Creates or reuses the path for `word` and marks its last node with
    /// `frequency`.
    pub fn insert(&mut self, word: &str, frequency: Frequency) {
        let mut node = &mut self.root;

        for ch in word.chars() {
            node = node.child_mut_or_insert(ch);
        }

        if !node.is_terminal() {
            self.len += 1;
        }

        node.set_terminal(frequency);
    }

    #[inline(always)]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Follows `prefix` from the root.
    pub fn find(&self, prefix: &str) -> Option<&TreeNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// Terminal frequency of `word`, if it was inserted.
    pub fn frequency(&self, word: &str) -> Option<Frequency> {
        self.find(word).and_then(TreeNode::terminal_frequency)
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
