use crate::{
    db::{atom::AtomDB, clause::db_clause::DbClause, watches::WatchSide},
    structures::{atom::Atom, literal::{CLiteral, Literal}},
};

impl DbClause {
    /// The position of the watch on `side`.
    pub fn watch(&self, side: WatchSide) -> usize {
        self.watches[side.index()]
    }

    /// The literal watched on `side`.
    pub fn watched(&self, side: WatchSide) -> CLiteral {
        self.clause[self.watches[side.index()]]
    }

    /// The atom of the literal watched on `side`.
    pub fn watched_atom(&self, side: WatchSide) -> Atom {
        self.watched(side).atom()
    }

    pub fn set_watch(&mut self, side: WatchSide, position: usize) {
        self.watches[side.index()] = position;
    }

    /// The position of the watcher for `side` in the watch list of the watched atom.
    pub fn slot(&self, side: WatchSide) -> usize {
        self.slots[side.index()]
    }

    pub fn set_slot(&mut self, side: WatchSide, slot: usize) {
        self.slots[side.index()] = slot;
    }

    /// A fresh position for the watch on `side`, if one exists.
    ///
    /// Positions are examined from the position after the current watch, wrapping around the end of the clause.
    /// The first position which is not the position of the other watch and whose literal is not false is returned.
    ///
    /// Note, the position of the other watch is excluded, rather than the literal of the other watch.
    /// So, a clause which contains some literal twice may watch the literal twice.
    pub fn watch_candidate(&self, side: WatchSide, atom_db: &AtomDB) -> Option<usize> {
        let length = self.clause.len();
        let current = self.watch(side);
        let other = self.watch(side.other());

        (1..length)
            .map(|step| (current + step) % length)
            .find(|&position| {
                position != other && !atom_db.is_falsified(self.clause[position])
            })
    }
}

#[cfg(test)]
mod tests {
    use slotmap::{DefaultKey, SlotMap};

    use crate::{
        config::Config,
        db::{
            atom::AtomDB,
            clause::db_clause::{ClauseStatus, DbClause},
            watches::WatchSide,
            ClauseKey,
        },
        structures::clause::ClauseSource,
    };

    #[test]
    fn candidates_wrap() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..4 {
            atom_db.fresh_atom(false).unwrap();
        }
        let mut keys: SlotMap<DefaultKey, ()> = SlotMap::new();
        let key = ClauseKey::Original(keys.insert(()));

        let mut clause = DbClause::from(key, vec![1, 2, 3, 4], ClauseSource::Original, 0);
        assert_eq!(clause.watch(WatchSide::Tail), 3);

        atom_db.set_value(-4, 1, None).unwrap();
        // Wraps past the end, and skips the head.
        assert_eq!(clause.watch_candidate(WatchSide::Tail, &atom_db), Some(1));
        clause.set_watch(WatchSide::Tail, 1);
        assert_eq!(clause.watched(WatchSide::Tail), 2);

        atom_db.set_value(-2, 1, None).unwrap();
        atom_db.set_value(-3, 1, None).unwrap();
        assert_eq!(clause.watch_candidate(WatchSide::Tail, &atom_db), None);
        assert_eq!(clause.status(&atom_db), ClauseStatus::Unit);
        assert_eq!(clause.unit_value(&atom_db), 1);
    }
}
