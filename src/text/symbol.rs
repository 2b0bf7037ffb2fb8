use std::fmt;

/// Position of a document in insertion order.
///
/// Ordinals are dense, start at zero and are never reused, so they double as
/// the identity of each document's terminator.
pub type DocumentOrdinal = usize;

/// Symbol stored on tree edges.
///
/// Terminators live in their own variant rather than in a reserved range of
/// code points, so no valid input character can ever compare equal to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// One Unicode scalar value of document text.
    Char(char),
    /// End-of-document marker, unique to the document with this ordinal.
    Terminator(DocumentOrdinal),
}

impl Symbol {
    /// Returns `true` for document terminators.
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, Symbol::Terminator(_))
    }

    /// The character carried by this symbol, if any.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Char(ch) => Some(ch),
            Symbol::Terminator(_) => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol::Char(ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "{ch}"),
            Symbol::Terminator(ordinal) => write!(f, "${ordinal}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_never_equal_characters() {
        for ch in ['\0', 'a', '$', '\u{FFFF}', char::MAX] {
            assert_ne!(Symbol::Char(ch), Symbol::Terminator(0));
        }
        assert_ne!(Symbol::Terminator(0), Symbol::Terminator(1));
    }

    #[test]
    fn characters_sort_before_terminators() {
        assert!(Symbol::Char(char::MAX) < Symbol::Terminator(0));
        assert!(Symbol::Terminator(3) < Symbol::Terminator(4));
    }

    #[test]
    fn display_marks_terminators() {
        assert_eq!(Symbol::from('中').to_string(), "中");
        assert_eq!(Symbol::Terminator(7).to_string(), "$7");
    }
}
