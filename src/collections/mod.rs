//! Collections provided by the crate.
//!
//! - `trie`: prefix tree over alphabetic words

pub mod trie;

pub use trie::{Node, PrefixTree, TrieError, Word};
