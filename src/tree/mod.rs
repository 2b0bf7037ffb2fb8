//! Suffix tree node/edge model
//!
//! A compressed trie over the suffixes of every inserted document:
//!
//! - at most one outgoing edge per distinct first symbol
//! - edge labels are non-empty spans into document buffers
//! - every node carries the set of documents passing through it, and a
//!   node's set always contains each of its children's sets
//!
//! Storage is a single append-only [`Arena`]; links between nodes are
//! indices, not references.

mod arena;
mod membership;
mod node;

pub use arena::Arena;
pub use membership::Membership;
pub use node::{Edge, EdgeEnd, EdgeId, Node, NodeId, Span};
