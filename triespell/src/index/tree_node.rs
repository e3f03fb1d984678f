use hashbrown::HashMap;

use crate::types::Frequency;

/// One node of the prefix index. The path from the root to a node spells a
/// prefix of at least one dictionary word.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    children: HashMap<char, TreeNode>,
    terminal_frequency: Option<Frequency>,
}

impl std::cmp::PartialEq for TreeNode {
    fn eq(&self, other: &TreeNode) -> bool {
        self.terminal_frequency == other.terminal_frequency && self.children == other.children
    }
}

impl std::cmp::Eq for TreeNode {}

impl TreeNode {
    #[inline(always)]
    pub fn empty() -> TreeNode {
        TreeNode::default()
    }

    #[inline(always)]
    pub fn child(&self, ch: char) -> Option<&TreeNode> {
        self.children.get(&ch)
    }

    /// Characters that continue this prefix somewhere in the dictionary.
    #[inline(always)]
    pub fn children(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    #[inline(always)]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Frequency of the word ending here, if any.
    #[inline(always)]
    pub fn terminal_frequency(&self) -> Option<Frequency> {
        self.terminal_frequency
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.terminal_frequency.is_some()
    }

    pub(crate) fn child_mut_or_insert(&mut self, ch: char) -> &mut TreeNode {
        self.children.entry(ch).or_insert_with(TreeNode::empty)
    }

    pub(crate) fn set_terminal(&mut self, frequency: Frequency) {
        self.terminal_frequency = Some(frequency);
    }
}
