//! Append-only storage for nodes and edges
//!
//! Node 0 is the root. Nothing is ever removed, so every `NodeId` and
//! `EdgeId` stays valid for the life of the tree.

use super::membership::Membership;
use super::node::{Edge, EdgeEnd, EdgeId, Node, NodeId, Span};
use crate::text::{DocumentOrdinal, Symbol};

/// Node and edge storage for one suffix tree.
#[derive(Debug, Clone)]
pub struct Arena {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Arena {
    /// The root node, present from construction.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena holding only the root.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Arena with room reserved for `nodes` nodes (and as many edges).
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Self {
            nodes: Vec::with_capacity(nodes.max(1)),
            edges: Vec::with_capacity(nodes.saturating_sub(1)),
        };
        arena.nodes.push(Node::default());
        arena
    }

    /// Node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Edge by id.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Outgoing edge of `node` starting with `symbol`.
    #[inline]
    pub fn child(&self, node: NodeId, symbol: Symbol) -> Option<EdgeId> {
        self.node(node).child(symbol)
    }

    /// Parent of `node`, `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)
            .incoming
            .map(|incoming| self.edge(incoming).source)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        self.edges.push(edge);
        EdgeId(self.edges.len() - 1)
    }

    /// Hang a new leaf off `parent` under `first`.
    ///
    /// The leaf starts with `{document}` as its membership; ancestors are left
    /// to [`Arena::stamp_ancestors`].
    pub fn add_leaf(
        &mut self,
        parent: NodeId,
        first: Symbol,
        span: Span,
        document: DocumentOrdinal,
    ) -> (EdgeId, NodeId) {
        debug_assert!(
            self.child(parent, first).is_none(),
            "branching symbol already taken"
        );
        let edge_id = EdgeId(self.edges.len());
        let leaf = self.push_node(Node::with_membership(
            Some(edge_id),
            Membership::singleton(document),
        ));
        let pushed = self.push_edge(Edge {
            span,
            source: parent,
            target: leaf,
        });
        debug_assert_eq!(pushed, edge_id);
        self.node_mut(parent).children.insert(first, edge_id);
        (edge_id, leaf)
    }

    /// Split `edge` (keyed by `first` under its source) after `offset`
    /// symbols and return the new internal node.
    ///
    /// The existing edge id keeps the lower part of the label, so a leaf edge
    /// stays addressable by the same id after any number of splits above it.
    /// `next` must be the symbol at `offset` on the original label. The new
    /// node inherits the membership of the node below it.
    pub fn split_edge(
        &mut self,
        edge: EdgeId,
        first: Symbol,
        offset: usize,
        next: Symbol,
    ) -> NodeId {
        let Edge {
            span,
            source,
            target,
        } = self.edge(edge).clone();
        debug_assert!(offset > 0, "split point must be inside the label");

        let upper_id = EdgeId(self.edges.len());
        let membership = self.node(target).membership.clone();
        let internal = self.push_node(Node::with_membership(Some(upper_id), membership));
        let upper = self.push_edge(Edge {
            span: Span::closed(span.document, span.start, span.start + offset),
            source,
            target: internal,
        });
        debug_assert_eq!(upper, upper_id);

        let lower = &mut self.edges[edge.0];
        lower.span.start += offset;
        lower.source = internal;

        self.node_mut(internal).children.insert(next, edge);
        self.node_mut(source).children.insert(first, upper);
        internal
    }

    /// Record the suffix link of `from`.
    pub fn set_suffix_link(&mut self, from: NodeId, to: NodeId) {
        self.node_mut(from).suffix_link = Some(to);
    }

    /// Fix the end of an open edge.
    pub fn close_edge(&mut self, edge: EdgeId, end: usize) {
        let span = &mut self.edges[edge.0].span;
        debug_assert!(span.is_open(), "edge already closed");
        span.end = EdgeEnd::Closed(end);
    }

    /// Add `document` to `node` and each ancestor, stopping at the first one
    /// that already has it. Returns the number of nodes updated.
    ///
    /// Stopping early is sound because membership only ever grows toward the
    /// root: a node holding `document` has every ancestor holding it too.
    pub fn stamp_ancestors(&mut self, node: NodeId, document: DocumentOrdinal) -> usize {
        let mut stamped = 0;
        let mut current = Some(node);
        while let Some(id) = current {
            if !self.node_mut(id).membership.insert(document) {
                break;
            }
            stamped += 1;
            current = self.parent(id);
        }
        stamped
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
