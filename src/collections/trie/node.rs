//! Trie vertices.

use super::error::TrieError;

/// Letter stored in the root node. It never takes part in lookups.
pub const ROOT_LETTER: char = '\0';

/// A node in the prefix tree.
///
/// Each node contains:
/// - The letter of the edge leading to it from its parent. It is kept for
///   inspection only: lookups go through the parent's children, and the
///   root's [`ROOT_LETTER`] is never compared.
/// - A flag telling whether a stored word ends here.
/// - Its children, sorted by letter.
///
/// Children are owned directly; there are no parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    letter: char,
    is_word_end: bool,
    /// Sorted by `letter`, keys unique.
    children: Vec<Node>,
}

impl Node {
    /// Creates a new node with no children that does not end a word.
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            is_word_end: false,
            children: Vec::new(),
        }
    }

    /// Creates the sentinel root node.
    pub(crate) fn root() -> Self {
        Self::new(ROOT_LETTER)
    }

    /// The letter this node was created for.
    pub fn letter(&self) -> char {
        self.letter
    }

    fn position(&self, letter: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&letter, |child| child.letter)
    }

    /// Adds a child for `letter` unless one already exists.
    ///
    /// An existing child is left untouched, together with its flag and
    /// descendants. Returns the child either way.
    pub fn add_child(&mut self, letter: char) -> &mut Node {
        self.child_entry(letter).0
    }

    /// Like [`add_child`](Self::add_child), also reporting whether the child
    /// was created.
    pub(crate) fn child_entry(&mut self, letter: char) -> (&mut Node, bool) {
        let (pos, created) = match self.position(letter) {
            Ok(pos) => (pos, false),
            Err(pos) => {
                self.children.insert(pos, Node::new(letter));
                (pos, true)
            }
        };
        (&mut self.children[pos], created)
    }

    /// Finds the child for `letter`.
    pub fn get_child(&self, letter: char) -> Result<&Node, TrieError> {
        self.position(letter)
            .map(|pos| &self.children[pos])
            .map_err(|_| TrieError::NotFound(letter))
    }

    /// Finds the child for `letter`, mutably.
    pub fn get_child_mut(&mut self, letter: char) -> Result<&mut Node, TrieError> {
        match self.position(letter) {
            Ok(pos) => Ok(&mut self.children[pos]),
            Err(_) => Err(TrieError::NotFound(letter)),
        }
    }

    /// Marks this node as the end of a stored word.
    pub fn set_word_end(&mut self) {
        self.is_word_end = true;
    }

    /// Unmarks this node. Children are kept.
    pub fn clear_word_end(&mut self) {
        self.is_word_end = false;
    }

    /// Returns true if a stored word ends at this node.
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Iterates over the children in ascending letter order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.children.iter()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub(crate) fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Returns true if any node in the subtree rooted here ends a word.
    pub(crate) fn subtree_has_word(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_word_end {
                return true;
            }
            stack.extend(node.children.iter());
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_keeps_existing() {
        let mut node = Node::root();
        node.add_child('b').set_word_end();
        node.add_child('b').add_child('c');

        // Adding 'b' again must not reset the flag or drop 'c'.
        let child = node.add_child('b');
        assert!(child.is_word_end());
        assert_eq!(child.child_count(), 1);
        assert_eq!(node.child_count(), 1);

        assert!(!node.child_entry('b').1);
        assert!(node.child_entry('e').1);
    }

    #[test]
    fn test_children_sorted() {
        let mut node = Node::root();
        for letter in ['d', 'a', 'c', 'b', 'a'] {
            node.add_child(letter);
        }
        let letters: Vec<char> = node.children().map(Node::letter).collect();
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_get_child() {
        let mut node = Node::root();
        node.add_child('x');

        assert_eq!(node.get_child('x').map(Node::letter), Ok('x'));
        assert_eq!(node.get_child('y'), Err(TrieError::NotFound('y')));
        assert_eq!(
            node.get_child_mut('z').map(|n| n.letter()),
            Err(TrieError::NotFound('z'))
        );

        node.get_child_mut('x').unwrap().set_word_end();
        assert!(node.get_child('x').unwrap().is_word_end());
    }

    #[test]
    fn test_word_end_flag_idempotent() {
        let mut node = Node::new('a');
        assert!(!node.is_word_end());
        node.set_word_end();
        node.set_word_end();
        assert!(node.is_word_end());
        node.clear_word_end();
        node.clear_word_end();
        assert!(!node.is_word_end());
    }

    #[test]
    fn test_subtree_queries() {
        let mut root = Node::root();
        root.add_child('a').add_child('b');
        root.add_child('c');
        assert_eq!(root.subtree_len(), 4);
        assert!(!root.subtree_has_word());
        assert!(!root.is_leaf());

        root.get_child_mut('a').unwrap().get_child_mut('b').unwrap().set_word_end();
        assert!(root.subtree_has_word());
        assert!(root.get_child('c').unwrap().is_leaf());
    }
}
