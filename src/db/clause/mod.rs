/*!
A database of clause related things.

Clauses are stored in one of two [SlotMap]s, depending on whether the clause is original or an addition, and are accessed through a [ClauseKey].
Clauses are never removed from the database, and so a key remains valid for the lifetime of the database.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
In particular, every stored clause contains at least one literal, and no stored clause contains `0`.
*/

pub mod db_clause;

use db_clause::DbClause;
use slotmap::{DefaultKey, SlotMap};

use crate::{
    db::keys::ClauseKey,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause, ClauseSource},
    types::err::{self},
};

/// A database of clause related things.
#[derive(Default)]
pub struct ClauseDB {
    /// Original clauses.
    original: SlotMap<DefaultKey, DbClause>,

    /// Addition clauses.
    addition: SlotMap<DefaultKey, DbClause>,
}

impl ClauseDB {
    /// Stores a clause, and returns the key to the stored clause.
    ///
    /// The source of the clause determines which store the clause is placed in.
    /// Watchers for the clause are *not* added to the watch lists.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        lbd: u32,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            log::error!(target: targets::CLAUSE_DB, "Attempt to store an empty clause");
            return Err(err::ClauseDBError::EmptyClause);
        }
        if clause.contains(&0) {
            return Err(err::ClauseDBError::ZeroLiteral);
        }

        log::trace!(target: targets::CLAUSE_DB, "Storing {} from {source:?}", clause.as_dimacs(false));

        let key = match source {
            ClauseSource::Original => ClauseKey::Original(self.original.insert_with_key(|k| {
                DbClause::from(ClauseKey::Original(k), clause, source, lbd)
            })),
            ClauseSource::Resolution => ClauseKey::Addition(self.addition.insert_with_key(|k| {
                DbClause::from(ClauseKey::Addition(k), clause, source, lbd)
            })),
        };

        Ok(key)
    }

    /// The clause at `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&DbClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(k) => self.original.get(*k),
            ClauseKey::Addition(k) => self.addition.get(*k),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// The clause at `key`, mutably.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut DbClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(k) => self.original.get_mut(*k),
            ClauseKey::Addition(k) => self.addition.get_mut(*k),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition.len()
    }

    /// A count of all clauses.
    pub fn total_count(&self) -> usize {
        self.original.len() + self.addition.len()
    }

    /// An iterator over all original clauses.
    pub fn all_original_clauses(&self) -> impl Iterator<Item = &DbClause> + '_ {
        self.original.values()
    }

    /// An iterator over all addition clauses.
    pub fn all_addition_clauses(&self) -> impl Iterator<Item = &DbClause> + '_ {
        self.addition.values()
    }

    /// The keys of all clauses, original clauses first.
    pub fn all_keys(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.original
            .keys()
            .map(ClauseKey::Original)
            .chain(self.addition.keys().map(ClauseKey::Addition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separate_stores() {
        let mut clause_db = ClauseDB::default();

        let original = clause_db.store(vec![1, -2], ClauseSource::Original, 0).unwrap();
        let addition = clause_db.store(vec![-1], ClauseSource::Resolution, 1).unwrap();

        assert!(original.is_original());
        assert!(!addition.is_original());
        assert_eq!(clause_db.original_count(), 1);
        assert_eq!(clause_db.addition_count(), 1);

        let stored = clause_db.get(&addition).unwrap();
        assert_eq!(stored.key(), addition);
        assert_eq!(stored.lbd(), 1);
        assert_eq!(stored.clause(), &vec![-1]);

        assert_eq!(clause_db.all_keys().next(), Some(original));
    }

    #[test]
    fn rejected_clauses() {
        let mut clause_db = ClauseDB::default();

        assert_eq!(
            clause_db.store(vec![], ClauseSource::Original, 0),
            Err(err::ClauseDBError::EmptyClause)
        );
        assert_eq!(
            clause_db.store(vec![1, 0, 2], ClauseSource::Original, 0),
            Err(err::ClauseDBError::ZeroLiteral)
        );
        assert_eq!(clause_db.total_count(), 0);
    }
}
