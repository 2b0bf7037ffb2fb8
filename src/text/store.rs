use super::symbol::{DocumentOrdinal, Symbol};

/// Caller-chosen, opaque document identifier. Uniqueness is not enforced.
pub type DocumentId = i64;

/// One inserted word: its identifier and its characters.
///
/// The terminator is implicit: it sits at index `len()` and is derived from
/// the ordinal, so it is never stored alongside the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    ordinal: DocumentOrdinal,
    runes: Box<[char]>,
}

impl Document {
    fn new(id: DocumentId, ordinal: DocumentOrdinal, word: &str) -> Self {
        Self {
            id,
            ordinal,
            runes: word.chars().collect(),
        }
    }

    /// Identifier supplied to `put`.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Insertion position of this document.
    pub fn ordinal(&self) -> DocumentOrdinal {
        self.ordinal
    }

    /// Number of characters, excluding the terminator.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether the document has no characters.
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Number of symbols including the terminator.
    #[inline]
    pub fn symbol_len(&self) -> usize {
        self.runes.len() + 1
    }

    /// Symbol at `index`; `index == len()` yields the terminator.
    #[inline]
    pub fn symbol(&self, index: usize) -> Symbol {
        debug_assert!(index < self.symbol_len(), "symbol index out of range");
        match self.runes.get(index) {
            Some(&ch) => Symbol::Char(ch),
            None => self.terminator(),
        }
    }

    /// The sentinel closing this document.
    #[inline]
    pub fn terminator(&self) -> Symbol {
        Symbol::Terminator(self.ordinal)
    }

    /// Characters of the document.
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// Document text as an owned string.
    pub fn text(&self) -> String {
        self.runes.iter().collect()
    }
}

/// Append-only storage for every inserted document.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Vec::with_capacity(capacity),
        }
    }

    /// Append a document and return its ordinal.
    pub fn push(&mut self, id: DocumentId, word: &str) -> DocumentOrdinal {
        let ordinal = self.documents.len();
        self.documents.push(Document::new(id, ordinal, word));
        ordinal
    }

    /// Document at `ordinal`.
    ///
    /// Panics when `ordinal` was never issued; every ordinal held by the tree
    /// comes from [`DocumentStore::push`].
    #[inline]
    pub fn get(&self, ordinal: DocumentOrdinal) -> &Document {
        &self.documents[ordinal]
    }

    /// Document at `ordinal`, if it exists.
    pub fn try_get(&self, ordinal: DocumentOrdinal) -> Option<&Document> {
        self.documents.get(ordinal)
    }

    /// Symbol `index` of document `ordinal`.
    #[inline]
    pub fn symbol(&self, ordinal: DocumentOrdinal, index: usize) -> Symbol {
        self.get(ordinal).symbol(index)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total symbols across all documents, terminators included.
    pub fn symbol_count(&self) -> usize {
        self.documents.iter().map(Document::symbol_len).sum()
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_dense_ordinals() {
        let mut store = DocumentStore::new();
        assert_eq!(store.push(42, "banana"), 0);
        assert_eq!(store.push(42, "apple"), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).id(), 42);
        assert_eq!(store.get(1).ordinal(), 1);
    }

    #[test]
    fn multibyte_text_is_indexed_by_character() {
        let mut store = DocumentStore::new();
        let ordinal = store.push(2, "中文app");
        let doc = store.get(ordinal);

        assert_eq!(doc.len(), 5);
        assert_eq!(doc.symbol(0), Symbol::Char('中'));
        assert_eq!(doc.symbol(1), Symbol::Char('文'));
        assert_eq!(doc.symbol(5), Symbol::Terminator(ordinal));
        assert_eq!(doc.runes(), &['中', '文', 'a', 'p', 'p']);
        assert_eq!(doc.text(), "中文app");
    }

    #[test]
    fn empty_word_is_only_a_terminator() {
        let mut store = DocumentStore::new();
        let ordinal = store.push(0, "");
        let doc = store.get(ordinal);

        assert!(doc.is_empty());
        assert_eq!(doc.symbol_len(), 1);
        assert_eq!(doc.symbol(0), doc.terminator());
        assert_eq!(store.symbol_count(), 1);
    }
}
