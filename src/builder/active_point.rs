//! Construction cursor
//!
//! `(node, edge, length)`: start at `node`, take the edge whose label begins
//! with the current document's symbol at index `edge`, and go `length`
//! symbols down it.

use crate::tree::{Arena, NodeId};

/// Where the next suffix extension resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    /// Node the cursor hangs off.
    pub node: NodeId,
    /// Index in the current document of the first symbol of the active edge.
    pub edge: usize,
    /// Symbols matched along the active edge.
    pub length: usize,
}

impl ActivePoint {
    /// Cursor at the root with nothing matched.
    pub fn root() -> Self {
        Self {
            node: Arena::ROOT,
            edge: 0,
            length: 0,
        }
    }

    /// Whether the cursor sits exactly on `node`.
    #[inline]
    pub fn is_at_node(&self) -> bool {
        self.length == 0
    }

    /// Whether the cursor hangs off the root.
    #[inline]
    pub fn is_at_root(&self) -> bool {
        self.node == Arena::ROOT
    }

    /// Move past an edge of `edge_len` symbols onto `target`.
    #[inline]
    pub fn descend(&mut self, target: NodeId, edge_len: usize) {
        debug_assert!(self.length >= edge_len);
        self.node = target;
        self.edge += edge_len;
        self.length -= edge_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_point_is_at_node() {
        let point = ActivePoint::root();
        assert!(point.is_at_root());
        assert!(point.is_at_node());
    }

    #[test]
    fn descend_consumes_edge() {
        let mut point = ActivePoint {
            node: Arena::ROOT,
            edge: 3,
            length: 5,
        };
        point.descend(NodeId(4), 2);
        assert_eq!(point.node, NodeId(4));
        assert_eq!(point.edge, 5);
        assert_eq!(point.length, 3);
        assert!(!point.is_at_root());
    }
}
