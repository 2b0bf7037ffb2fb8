//! Substring search over the built tree
//!
//! A query descends from the root one character at a time. Once the pattern
//! is consumed, the node at (or just below) that point already holds the
//! deduplicated set of matching documents, so answering costs
//! `O(|pattern| + |result|)` regardless of how large the subtree is.

mod common;
mod limit;

pub use common::longest_common_substring;
pub use limit::SearchLimit;

use std::collections::HashSet;

use crate::text::{DocumentId, DocumentStore, Symbol};
use crate::tree::{Arena, Membership, NodeId};

/// Node whose subtree holds every occurrence of `pattern`.
///
/// When the pattern ends partway along an edge, the node below that edge is
/// returned. `None` means the pattern occurs in no document. An empty pattern
/// locates the root.
pub fn locate(arena: &Arena, store: &DocumentStore, pattern: &[char]) -> Option<NodeId> {
    let mut node = Arena::ROOT;
    let mut matched = 0;

    while matched < pattern.len() {
        let edge = arena.edge(arena.child(node, Symbol::Char(pattern[matched]))?);
        let span = edge.span();
        let document = store.get(span.document);
        let end = span.end.resolve(document.symbol_len());

        for index in span.start..end {
            if matched == pattern.len() {
                break;
            }
            if document.symbol(index) != Symbol::Char(pattern[matched]) {
                return None;
            }
            matched += 1;
        }
        node = edge.target();
    }

    Some(node)
}

/// Ids of the documents containing `pattern`.
///
/// Empty patterns and zero limits match nothing. Ids are distinct and come
/// out in the order their first matching document was inserted.
pub fn search(
    arena: &Arena,
    store: &DocumentStore,
    pattern: &str,
    limit: SearchLimit,
) -> Vec<DocumentId> {
    if pattern.is_empty() || limit.is_zero() {
        return Vec::new();
    }
    let pattern: Vec<char> = pattern.chars().collect();
    match locate(arena, store, &pattern) {
        Some(node) => collect_ids(arena.node(node).membership(), store, limit),
        None => Vec::new(),
    }
}

/// Map member ordinals to caller ids, dropping repeated ids and stopping at
/// the limit.
pub fn collect_ids(
    membership: &Membership,
    store: &DocumentStore,
    limit: SearchLimit,
) -> Vec<DocumentId> {
    let cap = limit.cap().unwrap_or(usize::MAX).min(membership.len());
    let mut ids = Vec::with_capacity(cap);
    let mut seen = HashSet::with_capacity(cap);

    for ordinal in membership.iter() {
        if ids.len() >= cap {
            break;
        }
        let id = store.get(ordinal).id();
        if seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}
