//! Online generalized construction
//!
//! Ukkonen's algorithm run once per document against the shared tree. Each
//! document is inserted from a fresh [`ActivePoint`] at the root; suffixes
//! already spelled by earlier documents are walked, not duplicated, and the
//! document's unique terminator forces every one of its suffixes onto a leaf
//! by the end of the last phase.
//!
//! Membership is stamped as structure is created: a new leaf gets its own
//! document, a split node inherits the set of the node below it, and the
//! document is pushed up through ancestors until one already has it.
//!
//! All cursor state lives in [`Extension`], which is dropped when the
//! document is done.

mod active_point;

pub use active_point::ActivePoint;

use tracing::trace;

use crate::text::{Document, DocumentOrdinal, DocumentStore, Symbol};
use crate::tree::{Arena, EdgeId, NodeId, Span};

/// What one insertion did to the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertSummary {
    /// Symbols consumed, terminator included.
    pub symbols: usize,
    /// Leaves created (one per suffix, so equal to `symbols`).
    pub leaves: usize,
    /// Edge splits, i.e. internal nodes created.
    pub splits: usize,
    /// Membership entries added to pre-existing or split nodes.
    pub stamped: usize,
}

/// Insert the already stored document `ordinal` into `arena`.
pub fn insert_document(
    arena: &mut Arena,
    store: &DocumentStore,
    ordinal: DocumentOrdinal,
) -> InsertSummary {
    let document = store.get(ordinal);
    let mut extension = Extension::new(arena, store, document);
    for position in 0..document.symbol_len() {
        extension.extend(position);
    }
    extension.finish()
}

/// Construction state for a single document.
struct Extension<'a> {
    arena: &'a mut Arena,
    store: &'a DocumentStore,
    document: &'a Document,
    active: ActivePoint,
    /// Suffixes still waiting to be made explicit.
    remaining: usize,
    /// Internal node created in this phase whose suffix link is not set yet.
    pending_link: Option<NodeId>,
    /// Exclusive end shared by every open edge.
    open_end: usize,
    /// Leaf edges of this document, closed in [`Extension::finish`].
    open_edges: Vec<EdgeId>,
    summary: InsertSummary,
}

impl<'a> Extension<'a> {
    fn new(arena: &'a mut Arena, store: &'a DocumentStore, document: &'a Document) -> Self {
        Self {
            arena,
            store,
            document,
            active: ActivePoint::root(),
            remaining: 0,
            pending_link: None,
            open_end: 0,
            open_edges: Vec::with_capacity(document.symbol_len()),
            summary: InsertSummary::default(),
        }
    }

    /// One phase: append the symbol at `position`.
    fn extend(&mut self, position: usize) {
        let symbol = self.document.symbol(position);
        self.open_end = position + 1;
        self.remaining += 1;
        self.pending_link = None;
        self.summary.symbols += 1;

        while self.remaining > 0 {
            if self.active.is_at_node() {
                self.active.edge = position;
            }
            let first = self.document.symbol(self.active.edge);

            match self.arena.child(self.active.node, first) {
                None => {
                    self.add_leaf(self.active.node, symbol, position);
                    self.link_pending(self.active.node);
                }
                Some(edge) => {
                    if self.walk_down(edge) {
                        continue;
                    }
                    if self.symbol_on_edge(edge, self.active.length) == symbol {
                        // Already present; the rest of this phase is implicit.
                        self.link_pending(self.active.node);
                        self.active.length += 1;
                        break;
                    }
                    let internal = self.split(edge, first, symbol, position);
                    self.link_pending(internal);
                    self.pending_link = Some(internal);
                }
            }

            self.remaining -= 1;
            if self.active.is_at_root() && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = position + 1 - self.remaining;
            } else if !self.active.is_at_root() {
                self.active.node = self
                    .arena
                    .node(self.active.node)
                    .suffix_link()
                    .unwrap_or(Arena::ROOT);
            }
        }
    }

    /// Close this document's leaf edges and hand back the summary.
    fn finish(self) -> InsertSummary {
        debug_assert_eq!(self.remaining, 0, "terminator left suffixes implicit");
        let end = self.document.symbol_len();
        for &edge in &self.open_edges {
            self.arena.close_edge(edge, end);
        }
        self.summary
    }

    /// Skip over `edge` when the active length covers all of it.
    fn walk_down(&mut self, edge: EdgeId) -> bool {
        let edge = self.arena.edge(edge);
        let (target, len) = (edge.target(), edge.span().len(self.open_end));
        if self.active.length >= len {
            self.active.descend(target, len);
            true
        } else {
            false
        }
    }

    fn symbol_on_edge(&self, edge: EdgeId, offset: usize) -> Symbol {
        let span = self.arena.edge(edge).span();
        self.store.symbol(span.document, span.start + offset)
    }

    fn add_leaf(&mut self, parent: NodeId, symbol: Symbol, position: usize) {
        let ordinal = self.document.ordinal();
        let span = Span::open(ordinal, position);
        let (edge, leaf) = self.arena.add_leaf(parent, symbol, span, ordinal);
        self.open_edges.push(edge);
        self.summary.leaves += 1;
        self.summary.stamped += self.arena.stamp_ancestors(parent, ordinal);
        trace!(%parent, %leaf, %symbol, position, "leaf");
    }

    fn split(&mut self, edge: EdgeId, first: Symbol, symbol: Symbol, position: usize) -> NodeId {
        let next = self.symbol_on_edge(edge, self.active.length);
        let internal = self.arena.split_edge(edge, first, self.active.length, next);
        self.summary.splits += 1;
        trace!(
            parent = %self.active.node,
            %internal,
            offset = self.active.length,
            %next,
            "split"
        );
        self.add_leaf(internal, symbol, position);
        internal
    }

    fn link_pending(&mut self, to: NodeId) {
        if let Some(from) = self.pending_link.take() {
            self.arena.set_suffix_link(from, to);
        }
    }
}
