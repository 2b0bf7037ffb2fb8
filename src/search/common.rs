//! Longest substring shared by every document
//!
//! Read straight off the membership sets: the answer is the deepest node
//! whose membership covers all documents. Subtrees whose root misses a
//! document are pruned, since membership only shrinks going down.

use crate::text::DocumentStore;
use crate::tree::{Arena, NodeId, Span};

/// Longest substring common to all inserted documents.
///
/// Empty when there are no documents or they share nothing. Among several
/// candidates of equal length, the one reached first in symbol order wins.
pub fn longest_common_substring(arena: &Arena, store: &DocumentStore) -> String {
    let total = store.len();
    if total == 0 {
        return String::new();
    }

    let mut best: Option<(NodeId, usize)> = None;
    let mut stack = vec![(Arena::ROOT, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth > best.map_or(0, |(_, best_depth)| best_depth) {
            best = Some((node, depth));
        }

        let children: Vec<_> = arena.node(node).children().collect();
        for (_, edge) in children.into_iter().rev() {
            let edge = arena.edge(edge);
            if arena.node(edge.target()).membership().len() < total {
                continue;
            }
            let chars = label_chars(store, edge.span()).len();
            stack.push((edge.target(), depth + chars));
        }
    }

    best.map(|(node, _)| path_label(arena, store, node))
        .unwrap_or_default()
}

/// Characters spelled from the root down to `node`, terminators dropped.
pub(crate) fn path_label(arena: &Arena, store: &DocumentStore, node: NodeId) -> String {
    let mut spans = Vec::new();
    let mut current = node;
    while let Some(incoming) = arena.node(current).incoming() {
        let edge = arena.edge(incoming);
        spans.push(*edge.span());
        current = edge.source();
    }

    spans
        .iter()
        .rev()
        .flat_map(|span| label_chars(store, span))
        .collect()
}

/// Characters of an edge label; the terminator, if the label reaches it, is
/// not a character and is left out.
fn label_chars<'a>(store: &'a DocumentStore, span: &Span) -> &'a [char] {
    let runes = store.get(span.document).runes();
    let end = span.end.resolve(runes.len() + 1).min(runes.len());
    &runes[span.start.min(end)..end]
}
