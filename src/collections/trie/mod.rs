//! Prefix tree (trie) over alphabetic words.
//!
//! Each node owns its children directly, kept sorted by letter and searched
//! with binary search. A stored word is a root path whose last node carries
//! the word-end flag.
//!
//! Removal clears that flag and nothing else: the nodes of a removed word
//! stay allocated and are reused if the word is inserted again.

pub mod error;
pub mod node;
pub mod tree;
pub mod word;

pub use error::TrieError;
pub use node::Node;
pub use tree::PrefixTree;
pub use word::Word;
