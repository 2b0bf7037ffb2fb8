use std::fmt;

/// Bound on the number of distinct ids a search returns.
///
/// `From<i64>` maps negative values to [`SearchLimit::Unbounded`] and
/// non-negative values to [`SearchLimit::AtMost`]. A zero limit always yields
/// an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchLimit {
    /// Return every matching id.
    #[default]
    Unbounded,
    /// Return at most this many ids, earliest-inserted documents first.
    AtMost(usize),
}

impl SearchLimit {
    /// Maximum number of ids, `None` if unbounded.
    #[inline]
    pub fn cap(self) -> Option<usize> {
        match self {
            SearchLimit::Unbounded => None,
            SearchLimit::AtMost(n) => Some(n),
        }
    }

    /// Whether the limit forbids any result.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == SearchLimit::AtMost(0)
    }
}

impl From<i64> for SearchLimit {
    fn from(limit: i64) -> Self {
        if limit < 0 {
            SearchLimit::Unbounded
        } else {
            SearchLimit::AtMost(usize::try_from(limit).unwrap_or(usize::MAX))
        }
    }
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLimit::Unbounded => write!(f, "unbounded"),
            SearchLimit::AtMost(n) => write!(f, "at most {n}"),
        }
    }
}
