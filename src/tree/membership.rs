//! Per-node document membership
//!
//! Ordinals are kept in a compressed bitmap, which gives set semantics and
//! ascending (earliest-inserted first) iteration for free.

use roaring::RoaringTreemap;

use crate::text::DocumentOrdinal;

/// Set of documents whose suffixes pass through a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Membership {
    ordinals: RoaringTreemap,
}

impl Membership {
    /// Empty membership (root before any insertion).
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership of a freshly created leaf.
    pub fn singleton(ordinal: DocumentOrdinal) -> Self {
        let mut membership = Self::new();
        membership.insert(ordinal);
        membership
    }

    /// Add a document. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, ordinal: DocumentOrdinal) -> bool {
        self.ordinals.insert(ordinal as u64)
    }

    /// Whether `ordinal` is a member.
    #[inline]
    pub fn contains(&self, ordinal: DocumentOrdinal) -> bool {
        self.ordinals.contains(ordinal as u64)
    }

    /// Number of distinct documents.
    pub fn len(&self) -> usize {
        self.ordinals.len() as usize
    }

    /// Whether no document is a member.
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Members in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = DocumentOrdinal> + '_ {
        self.ordinals.iter().map(|ordinal| ordinal as DocumentOrdinal)
    }
}
