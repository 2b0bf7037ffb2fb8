//! Shared helpers: building trees from word lists and a brute-force oracle.

#![allow(dead_code)]

use std::collections::BTreeSet;

use gstree::{DocumentId, GeneralizedSuffixTree};

/// Build a tree tagging each word with its position, as callers usually do.
pub fn tree_of(words: &[&str]) -> GeneralizedSuffixTree {
    let mut tree = GeneralizedSuffixTree::new();
    for (id, word) in words.iter().enumerate() {
        tree.put(word, id as DocumentId);
    }
    tree
}

/// Ids of every `(word, id)` whose word contains `pattern`, by linear scan.
pub fn naive_search(documents: &[(String, DocumentId)], pattern: &str) -> BTreeSet<DocumentId> {
    if pattern.is_empty() {
        return BTreeSet::new();
    }
    documents
        .iter()
        .filter(|(word, _)| word.contains(pattern))
        .map(|&(_, id)| id)
        .collect()
}

/// Earliest-inserted distinct ids containing `pattern`, at most `limit`.
pub fn naive_first(
    documents: &[(String, DocumentId)],
    pattern: &str,
    limit: usize,
) -> Vec<DocumentId> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    if pattern.is_empty() {
        return ids;
    }
    for (word, id) in documents {
        if ids.len() == limit {
            break;
        }
        if word.contains(pattern) && seen.insert(*id) {
            ids.push(*id);
        }
    }
    ids
}

/// Every non-empty substring of `word` cut on character boundaries.
pub fn substrings(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            out.push(chars[start..end].iter().collect());
        }
    }
    out
}

/// Result of a search as a set, for order-insensitive comparison.
pub fn as_set(ids: Vec<DocumentId>) -> BTreeSet<DocumentId> {
    ids.into_iter().collect()
}
