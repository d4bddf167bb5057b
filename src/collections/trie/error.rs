//! Errors returned by the prefix tree.

/// The error type for prefix tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The word was empty or contained a non-alphabetic character.
    InvalidInput,
    /// A node has no child for the given letter.
    ///
    /// Only produced by [`Node::get_child`](super::Node::get_child) and
    /// [`Node::get_child_mut`](super::Node::get_child_mut). The tree turns it
    /// into a negative answer and never hands it to callers.
    NotFound(char),
}

impl core::fmt::Display for TrieError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("input must be alphabetic"),
            Self::NotFound(letter) => write!(f, "no such letter in children: {letter:?}"),
        }
    }
}

impl std::error::Error for TrieError {}
