use slotmap::DefaultKey;

/// A key to access a clause stored in the clause database.
///
/// Original clauses and added clauses are stored separately, and the key notes which store a clause is in together with the key of the clause in that store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause.
    Original(DefaultKey),

    /// The key to an addition.
    Addition(DefaultKey),
}

impl ClauseKey {
    /// Whether the key is to an original clause.
    pub fn is_original(&self) -> bool {
        matches!(self, Self::Original(_))
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key:?})"),
            Self::Addition(key) => write!(f, "Addition({key:?})"),
        }
    }
}
