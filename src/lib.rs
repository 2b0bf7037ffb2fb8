//! # Generalized Suffix Tree
//!
//! Indexes many independently supplied words ("documents"), each tagged with
//! a caller-chosen integer id, in one shared suffix tree that answers
//! "which documents contain substring S?".
//!
//! ## Core Algorithm
//!
//! 1. **Text storage**: each document keeps its characters plus a unique
//!    terminator; edges slice these buffers instead of copying them
//! 2. **Online construction**: Ukkonen's suffix-link driven algorithm extends
//!    the shared tree one document at a time
//! 3. **Membership stamping**: every node records which documents pass
//!    through it, maintained as nodes are created
//! 4. **Search**: character-wise descent, then read the membership set
//!
//! Result: `put` is near-linear in the word length, `search` costs
//! O(|pattern| + |result|).
//!
//! ## Usage Example
//!
//! ```
//! use gstree::GeneralizedSuffixTree;
//!
//! let mut tree = GeneralizedSuffixTree::new();
//! tree.put("banana", 0);
//! tree.put("apple", 1);
//! tree.put("中文app", 2);
//!
//! let mut hits = tree.search("app", -1);
//! hits.sort();
//! assert_eq!(hits, vec![1, 2]);
//! assert_eq!(tree.search("a", 1), vec![0]);
//! ```
//!
//! ## Concurrency
//!
//! `put` takes `&mut self` and `search` takes `&self`, so the borrow checker
//! already enforces single-writer / many-reader access. The tree is `Sync`;
//! share it behind an `Arc` (or `RwLock` if puts continue) for parallel reads.

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - one per component, leaves first
pub mod text;    // Document buffers and terminators
pub mod tree;    // Node/edge arena and membership sets
pub mod builder; // Online generalized construction
pub mod search;  // Descent, result collection, shared substrings

// Re-exports for convenience
pub use search::SearchLimit;
pub use text::{Document, DocumentId, DocumentOrdinal, Symbol};

use thiserror::Error;
use tracing::debug;

use builder::insert_document;
use text::DocumentStore;
use tree::Arena;

/// Generalized suffix tree over every document passed to [`put`](Self::put).
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixTree {
    config: TreeConfig,
    arena: Arena,
    documents: DocumentStore,
}

/// Storage reservation hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeConfig {
    /// Nodes to reserve up front
    pub node_capacity: usize,

    /// Documents to reserve up front
    pub document_capacity: usize,
}

impl TreeConfig {
    /// Reserve enough for `documents` words totalling `chars` characters.
    ///
    /// A suffix tree has at most one leaf per symbol and fewer internal
    /// nodes than leaves, so `2 * (chars + documents)` nodes always suffice.
    pub fn for_corpus(documents: usize, chars: usize) -> Self {
        Self {
            node_capacity: 2 * (chars + documents) + 1,
            document_capacity: documents,
        }
    }
}

/// Shape of the tree at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeStats {
    /// Documents inserted
    pub documents: usize,

    /// Symbols stored, one terminator per document included
    pub symbols: usize,

    /// All nodes, root included
    pub nodes: usize,

    /// Nodes with children, root excluded
    pub internal_nodes: usize,

    /// Nodes without children, root excluded
    pub leaves: usize,

    /// Edges
    pub edges: usize,

    /// Sum of membership set sizes over all nodes
    pub membership_entries: usize,
}

/// Errors raised at the byte-input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Input bytes are not UTF-8
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid prefix
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for TreeError {
    fn from(err: std::str::Utf8Error) -> Self {
        TreeError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

impl GeneralizedSuffixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with storage reserved per `config`
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            arena: Arena::with_capacity(config.node_capacity),
            documents: DocumentStore::with_capacity(config.document_capacity),
            config,
        }
    }

    /// Configuration the tree was created with
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Insert `word` as a new document tagged `id`.
    ///
    /// Never fails. Empty words and repeated ids are accepted; every call
    /// creates an independent document.
    pub fn put(&mut self, word: &str, id: DocumentId) {
        let ordinal = self.documents.push(id, word);
        let span = tracing::debug_span!(
            "put",
            ordinal,
            id,
            symbols = self.documents.get(ordinal).symbol_len()
        );
        let _enter = span.enter();

        let summary = insert_document(&mut self.arena, &self.documents, ordinal);
        debug!(
            leaves = summary.leaves,
            splits = summary.splits,
            stamped = summary.stamped,
            nodes = self.arena.node_count(),
            "document inserted"
        );
    }

    /// Insert raw bytes, rejecting anything that is not UTF-8
    pub fn put_bytes(&mut self, word: &[u8], id: DocumentId) -> Result<(), TreeError> {
        let word = std::str::from_utf8(word)?;
        self.put(word, id);
        Ok(())
    }

    /// Ids of documents containing `pattern`.
    ///
    /// A negative `limit` returns every match; otherwise at most `limit`
    /// distinct ids are returned, favouring earlier-inserted documents. A
    /// `limit` of zero and an empty `pattern` both return nothing.
    pub fn search(&self, pattern: &str, limit: i64) -> Vec<DocumentId> {
        self.search_with(pattern, SearchLimit::from(limit))
    }

    /// [`search`](Self::search) with a typed limit
    pub fn search_with(&self, pattern: &str, limit: SearchLimit) -> Vec<DocumentId> {
        let hits = search::search(&self.arena, &self.documents, pattern, limit);
        debug!(
            pattern_chars = pattern.chars().count(),
            %limit,
            hits = hits.len(),
            "search"
        );
        hits
    }

    /// Search with a byte pattern, rejecting anything that is not UTF-8
    pub fn search_bytes(&self, pattern: &[u8], limit: i64) -> Result<Vec<DocumentId>, TreeError> {
        let pattern = std::str::from_utf8(pattern)?;
        Ok(self.search(pattern, limit))
    }

    /// Whether any document contains the non-empty `pattern`
    pub fn contains(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let pattern: Vec<char> = pattern.chars().collect();
        search::locate(&self.arena, &self.documents, &pattern).is_some()
    }

    /// Longest substring shared by every document
    pub fn longest_common_substring(&self) -> String {
        search::longest_common_substring(&self.arena, &self.documents)
    }

    /// Number of documents inserted
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document by insertion position
    pub fn document(&self, ordinal: DocumentOrdinal) -> Option<&Document> {
        self.documents.try_get(ordinal)
    }

    /// Documents in insertion order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Read-only view of the node/edge arena
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Count nodes, edges and membership entries
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            documents: self.documents.len(),
            symbols: self.documents.symbol_count(),
            nodes: self.arena.node_count(),
            edges: self.arena.edge_count(),
            ..TreeStats::default()
        };
        for (id, node) in self.arena.nodes() {
            stats.membership_entries += node.membership().len();
            if id == Arena::ROOT {
                continue;
            }
            if node.is_leaf() {
                stats.leaves += 1;
            } else {
                stats.internal_nodes += 1;
            }
        }
        stats
    }
}

impl Default for GeneralizedSuffixTree {
    fn default() -> Self {
        Self::new()
    }
}
