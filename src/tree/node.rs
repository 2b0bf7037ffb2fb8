//! Vertices and labelled edges
//!
//! Edges carry a span into one document's buffer instead of a copy of their
//! label. Nodes and edges refer to each other by arena index, so suffix links
//! and parent links never form ownership cycles.

use std::collections::BTreeMap;
use std::fmt;

use super::membership::Membership;
use crate::text::{DocumentOrdinal, Symbol};

/// Stable index of a node in the [`Arena`](super::Arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Stable index of an edge in the [`Arena`](super::Arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

/// End of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Follows the insertion cursor of the document being inserted.
    Open,
    /// Fixed exclusive end index.
    Closed(usize),
}

impl EdgeEnd {
    /// Exclusive end index, substituting `open_end` for an open edge.
    #[inline]
    pub fn resolve(self, open_end: usize) -> usize {
        match self {
            EdgeEnd::Open => open_end,
            EdgeEnd::Closed(end) => end,
        }
    }
}

/// Edge label: the half-open range `start..end` of one document's symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Document whose buffer holds the label.
    pub document: DocumentOrdinal,
    /// First symbol index (inclusive).
    pub start: usize,
    /// Last symbol index (exclusive).
    pub end: EdgeEnd,
}

impl Span {
    /// Leaf label starting at `start` and growing with the cursor.
    pub fn open(document: DocumentOrdinal, start: usize) -> Self {
        Self {
            document,
            start,
            end: EdgeEnd::Open,
        }
    }

    /// Label with a fixed end.
    pub fn closed(document: DocumentOrdinal, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "edge labels are never empty");
        Self {
            document,
            start,
            end: EdgeEnd::Closed(end),
        }
    }

    /// Label length, resolving an open end against `open_end`.
    #[inline]
    pub fn len(&self, open_end: usize) -> usize {
        self.end.resolve(open_end) - self.start
    }

    /// Whether the end still tracks the insertion cursor.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end == EdgeEnd::Open
    }
}

/// Labelled edge between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) span: Span,
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
}

impl Edge {
    /// Label of this edge.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Node the edge leaves from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Node the edge leads to.
    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Tree vertex.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Outgoing edges keyed by the first symbol of their label.
    pub(crate) children: BTreeMap<Symbol, EdgeId>,
    /// Edge from the parent; `None` only for the root.
    pub(crate) incoming: Option<EdgeId>,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) membership: Membership,
}

impl Node {
    pub(crate) fn with_membership(incoming: Option<EdgeId>, membership: Membership) -> Self {
        Self {
            children: BTreeMap::new(),
            incoming,
            suffix_link: None,
            membership,
        }
    }

    /// Outgoing edge whose label starts with `symbol`.
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<EdgeId> {
        self.children.get(&symbol).copied()
    }

    /// Outgoing edges in symbol order.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, EdgeId)> + '_ {
        self.children.iter().map(|(&symbol, &edge)| (symbol, edge))
    }

    /// Whether the node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Edge from the parent.
    pub fn incoming(&self) -> Option<EdgeId> {
        self.incoming
    }

    /// Suffix link, once patched.
    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Documents whose suffixes pass through this node.
    pub fn membership(&self) -> &Membership {
        &self.membership
    }
}
