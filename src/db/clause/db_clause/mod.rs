//! A struct holding a [clause](Clause) and associated metadata.
//!
//! A [DbClause] contains:
//! - A [clause](Clause) (represented as a [CClause]).
//! - A [key](ClauseKey) used to access the [DbClause].
//! - The position of the two watched literals, together with the position of the watcher for each in the [watch lists](crate::db::watches).
//! - The literal block distance of the clause, and the source of the clause.
//!
//! # Terminology
//! ## Watched literals
//!
//! Two positions in the clause, the head and the tail.
//!
//! On storing a clause, the head is the first literal of the clause and the tail is the last.
//! So, for a clause containing a single literal the head and tail are the same.
//!
//! The status of the clause is determined by the watched literals alone, see [status](DbClause::status).
//! For details on the way watched literals are updated, see [watch_candidate](DbClause::watch_candidate).

use crate::{
    db::{
        atom::AtomDB,
        keys::ClauseKey,
        watches::WatchSide,
    },
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::CLiteral,
    },
};

use std::ops::Deref;

#[doc(hidden)]
mod watches;

/// The status of a clause, relative to the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some watched literal is true.
    Satisfied,

    /// Both watched literals are false.
    Unsatisfied,

    /// Exactly one watched literal is false and the other has no value, or the clause contains a single literal without a value.
    Unit,

    /// Neither watched literal has a value.
    Unresolved,
}

/// A clause together with some metadata.
pub struct DbClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The positions of the head and tail watches, in that order.
    watches: [usize; 2],

    /// The positions of the watchers of the head and tail in the watch lists of their atoms.
    slots: [usize; 2],

    /// The count of distinct (non-zero) decision levels among the literals of the clause, when the clause was derived.
    lbd: u32,

    source: ClauseSource,
}

impl DbClause {
    /// Bundles a [ClauseKey] and [CClause] into a [DbClause], with the head on the first literal and the tail on the last.
    ///
    /// Note: This does not store the [DbClause] in the [clause database](crate::db::clause::ClauseDB), nor does it add watchers to the watch lists.
    pub fn from(key: ClauseKey, clause: CClause, source: ClauseSource, lbd: u32) -> Self {
        let tail = clause.len().saturating_sub(1);
        DbClause {
            key,
            clause,
            watches: [0, tail],
            slots: [0, 0],
            lbd,
            source,
        }
    }

    /// The key used to access the [DbClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn lbd(&self) -> u32 {
        self.lbd
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The status of the clause, determined by the watched literals.
    ///
    /// In order:
    /// - If either watched literal is true, the clause is satisfied.
    /// - If both watched literals are false, the clause is unsatisfied.
    /// - If exactly one watched literal is false, or the head and tail are the same, the clause is unit.
    /// - Otherwise, the clause is unresolved.
    pub fn status(&self, atom_db: &AtomDB) -> ClauseStatus {
        let head = self.watched(WatchSide::Head);
        let tail = self.watched(WatchSide::Tail);

        if atom_db.is_satisfied(head) || atom_db.is_satisfied(tail) {
            return ClauseStatus::Satisfied;
        }

        let head_false = atom_db.is_falsified(head);
        let tail_false = atom_db.is_falsified(tail);

        if head_false && tail_false {
            ClauseStatus::Unsatisfied
        } else if head_false != tail_false || self.watches[0] == self.watches[1] {
            ClauseStatus::Unit
        } else {
            ClauseStatus::Unresolved
        }
    }

    /// The watched literal which is not false, if the clause is unit.
    ///
    /// If neither watched literal is false the head is returned.
    pub fn unit_value(&self, atom_db: &AtomDB) -> CLiteral {
        let head = self.watched(WatchSide::Head);
        match atom_db.is_falsified(head) {
            true => self.watched(WatchSide::Tail),
            false => head,
        }
    }
}

impl std::fmt::Display for DbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs(false))
    }
}

impl Deref for DbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

#[cfg(test)]
mod tests {
    use slotmap::{DefaultKey, SlotMap};

    use super::*;
    use crate::config::Config;

    fn atom_db(count: usize) -> AtomDB {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..count {
            atom_db.fresh_atom(false).unwrap();
        }
        atom_db
    }

    fn key() -> ClauseKey {
        let mut keys: SlotMap<DefaultKey, ()> = SlotMap::new();
        ClauseKey::Original(keys.insert(()))
    }

    #[test]
    fn statuses() {
        let mut atom_db = atom_db(3);
        let clause = DbClause::from(key(), vec![1, 2, 3], ClauseSource::Original, 0);

        assert_eq!(clause.status(&atom_db), ClauseStatus::Unresolved);

        // The middle literal is not watched.
        atom_db.set_value(-2, 1, None).unwrap();
        assert_eq!(clause.status(&atom_db), ClauseStatus::Unresolved);

        atom_db.set_value(-1, 1, None).unwrap();
        assert_eq!(clause.status(&atom_db), ClauseStatus::Unit);
        assert_eq!(clause.unit_value(&atom_db), 3);

        atom_db.set_value(-3, 1, None).unwrap();
        assert_eq!(clause.status(&atom_db), ClauseStatus::Unsatisfied);

        atom_db.clear_value(3);
        atom_db.set_value(3, 1, None).unwrap();
        assert_eq!(clause.status(&atom_db), ClauseStatus::Satisfied);
    }

    #[test]
    fn single_literal() {
        let mut atom_db = atom_db(1);
        let clause = DbClause::from(key(), vec![-1], ClauseSource::Original, 0);

        assert_eq!(clause.status(&atom_db), ClauseStatus::Unit);
        assert_eq!(clause.unit_value(&atom_db), -1);

        atom_db.set_value(1, 0, None).unwrap();
        assert_eq!(clause.status(&atom_db), ClauseStatus::Unsatisfied);
    }
}
