//! The prefix tree and its word-level operations.

use super::error::TrieError;
use super::node::Node;
use super::word::Word;

/// A prefix tree (trie) over alphabetic words.
///
/// Every stored word is a path from the root whose last node carries the
/// word-end flag. Shared prefixes share nodes.
///
/// Removing a word only clears its flag: nodes are never freed while the
/// tree is alive, so [`node_count`](Self::node_count) never decreases.
///
/// # Examples
///
/// ```
/// use prefix_tree::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("abc")?;
/// tree.insert("abcd")?;
///
/// assert!(tree.contains("abc")?);
/// assert!(!tree.contains("ab")?);
///
/// assert!(tree.remove("abc")?);
/// assert!(!tree.contains("abc")?);
/// assert!(tree.contains("abcd")?);
/// # Ok::<(), prefix_tree::TrieError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTree {
    root: Node,
    /// Number of words whose flag is set.
    len: usize,
    /// Number of allocated nodes, root included.
    nodes: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// Creates an empty tree holding only the root.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
            nodes: 1,
        }
    }

    /// Builds a tree from `words`, stopping at the first invalid one.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if any word is rejected.
    pub fn from_words<'a, I>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word)?;
        }
        Ok(tree)
    }

    /// The sentinel root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored. Nodes left behind by removals do
    /// not count.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, !self.root.subtree_has_word());
        self.len == 0
    }

    /// Number of allocated nodes, including the root and nodes whose words
    /// were removed.
    pub fn node_count(&self) -> usize {
        debug_assert_eq!(self.nodes, self.root.subtree_len());
        self.nodes
    }

    /// Inserts `word`.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if `word` is empty or not
    /// alphabetic. The tree is left untouched in that case.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let word = validate(word)?;
        self.insert_word(&word);
        Ok(())
    }

    /// Returns true if `word` was inserted and not removed since.
    ///
    /// A word that is only a prefix of stored words is not contained.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if `word` is empty or not
    /// alphabetic.
    pub fn contains(&self, word: &str) -> Result<bool, TrieError> {
        let word = validate(word)?;
        Ok(self.contains_word(&word))
    }

    /// Removes `word` by clearing its word-end flag.
    ///
    /// Returns true if the word was stored. Returns false if its path does
    /// not exist or ends on a node that is only a prefix. No node is freed.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if `word` is empty or not
    /// alphabetic.
    pub fn remove(&mut self, word: &str) -> Result<bool, TrieError> {
        let word = validate(word)?;
        Ok(self.remove_word(&word))
    }

    /// Inserts an already validated word.
    pub fn insert_word(&mut self, word: &Word<'_>) {
        let mut created = 0;
        let mut node = &mut self.root;
        for letter in word.chars() {
            let (child, is_new) = node.child_entry(letter);
            created += usize::from(is_new);
            node = child;
        }
        if !node.is_word_end() {
            node.set_word_end();
            self.len += 1;
        }
        self.nodes += created;

        #[cfg(feature = "tracing")]
        tracing::trace!(word = %word, created, "inserted word");
    }

    /// Looks up an already validated word.
    pub fn contains_word(&self, word: &Word<'_>) -> bool {
        let found = self.find(word).is_ok_and(Node::is_word_end);

        #[cfg(feature = "tracing")]
        tracing::trace!(word = %word, found, "looked up word");

        found
    }

    /// Removes an already validated word. See [`remove`](Self::remove).
    pub fn remove_word(&mut self, word: &Word<'_>) -> bool {
        let removed = match self.find_mut(word) {
            Ok(node) => {
                let was_word = node.is_word_end();
                node.clear_word_end();
                was_word
            }
            Err(_) => false,
        };
        if removed {
            self.len -= 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(word = %word, removed, "removed word");

        removed
    }

    /// Walks the path spelled by `word`, failing on the first missing letter.
    fn find(&self, word: &Word<'_>) -> Result<&Node, TrieError> {
        let mut node = &self.root;
        for letter in word.chars() {
            node = node.get_child(letter)?;
        }
        Ok(node)
    }

    fn find_mut(&mut self, word: &Word<'_>) -> Result<&mut Node, TrieError> {
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.get_child_mut(letter)?;
        }
        Ok(node)
    }
}

fn validate(word: &str) -> Result<Word<'_>, TrieError> {
    Word::new(word).inspect_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!(word, "rejected non-alphabetic word");
    })
}
