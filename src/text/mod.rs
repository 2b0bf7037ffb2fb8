//! Text storage
//!
//! Every document keeps its own append-only character buffer. Tree edges
//! address these buffers by `(ordinal, start, end)` and never copy text.
//!
//! Each document is closed by a terminator symbol derived from its ordinal,
//! which keeps the suffixes of different documents on distinct leaves.

mod store;
mod symbol;

pub use store::{Document, DocumentId, DocumentStore};
pub use symbol::{DocumentOrdinal, Symbol};
