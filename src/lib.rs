//! # `prefix_tree` - Alphabetic Prefix Tree
//!
//! A small prefix tree (trie) that stores alphabetic words and answers
//! exact-membership queries.
//!
//! ## Behaviour
//!
//! - **Validation**: every operation taking a `&str` first checks that the
//!   word is non-empty and alphabetic, and fails with
//!   [`TrieError::InvalidInput`] otherwise. Rejected input never touches the
//!   tree.
//! - **Exact membership**: a word is contained only if it was inserted
//!   itself; being a prefix of a stored word is not enough.
//! - **Flag-only removal**: removing a word clears its word-end flag. Nodes
//!   are never freed while the tree is alive.
//!
//! ## Architecture
//!
//! - [`Node`]: one letter position, its word-end flag and its owned
//!   children, sorted by letter.
//! - [`Word`]: a string validated once, accepted by the infallible
//!   `*_word` operations.
//! - [`PrefixTree`]: owns the root and walks it letter by letter.
//!
//! The tree has no interior mutability. Mutation needs `&mut self`, so
//! sharing between threads requires a lock around the whole tree.
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `trace` events for each operation
//! and a `debug` event for rejected input.
//!
//! ## Example
//!
//! ```rust
//! use prefix_tree::{PrefixTree, TrieError};
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("a")?;
//! tree.insert("abc")?;
//! tree.insert("abcd")?;
//!
//! assert!(tree.contains("a")?);
//! assert!(!tree.contains("ab")?);
//! assert!(tree.contains("abcd")?);
//!
//! assert_eq!(tree.insert("abc123"), Err(TrieError::InvalidInput));
//! # Ok::<(), TrieError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;

pub use collections::{Node, PrefixTree, TrieError, Word};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A node is a letter, a flag and a vector header; nothing is boxed.
    assert!(mem::size_of::<Node>() <= 2 * mem::size_of::<Vec<Node>>());

    // The validated word is a plain string slice.
    assert!(mem::size_of::<Word<'static>>() == mem::size_of::<&str>());
};
