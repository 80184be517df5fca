/*!
Watch lists, for each atom.

Each clause watches two of its literals, the head and the tail (which are the same literal for a clause of one literal).
For each watched literal, a [Watcher] is kept in the list of the atom of the literal, noting the clause and which of the two watches is on the atom.

The lists are unordered, and removal is by swapping the last watcher of a list into the position of the removed watcher.
To allow this to happen without a search, each clause records the position of each of its watchers.
So, removing a watcher returns whichever watcher was moved, in order for the record of the moved watcher to be updated.

```rust
# use heron_sat::db::watches::{Watcher, Watches, WatchSide};
# use heron_sat::db::ClauseKey;
# use slotmap::{DefaultKey, SlotMap};
let mut keys: SlotMap<DefaultKey, ()> = SlotMap::new();
let a = ClauseKey::Original(keys.insert(()));
let b = ClauseKey::Original(keys.insert(()));

let mut watches = Watches::default();
watches.fresh_atom();

let a_slot = watches.watch(1, Watcher { key: a, side: WatchSide::Head }).unwrap();
let b_slot = watches.watch(1, Watcher { key: b, side: WatchSide::Tail }).unwrap();

let moved = watches.unwatch(1, a_slot).unwrap();
assert_eq!(moved, Some(Watcher { key: b, side: WatchSide::Tail }));
assert_eq!(watches.watchers(1).len(), 1);
assert_ne!(a_slot, b_slot);
```
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err,
};

/// Which of the two watches of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchSide {
    Head,
    Tail,
}

impl WatchSide {
    /// The index of the side, for use with a pair of watches.
    pub fn index(&self) -> usize {
        match self {
            Self::Head => 0,
            Self::Tail => 1,
        }
    }

    /// The other side.
    pub fn other(&self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }
}

/// A note that the `side` watch of the clause at `key` is on some atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watcher {
    pub key: ClauseKey,
    pub side: WatchSide,
}

/// Watch lists, indexed by atoms.
pub struct Watches {
    lists: Vec<Vec<Watcher>>,
}

impl Default for Watches {
    fn default() -> Self {
        Watches {
            lists: vec![Vec::default()],
        }
    }
}

impl Watches {
    /// Extends the lists to include the next atom.
    pub fn fresh_atom(&mut self) {
        self.lists.push(Vec::default());
    }

    /// Adds a watcher to the list of `atom` and returns the position of the watcher in the list.
    pub fn watch(&mut self, atom: Atom, watcher: Watcher) -> Result<usize, err::ClauseDBError> {
        match self.lists.get_mut(atom as usize) {
            Some(list) => {
                list.push(watcher);
                Ok(list.len() - 1)
            }
            None => Err(err::ClauseDBError::CorruptWatch),
        }
    }

    /// Removes the watcher at `slot` from the list of `atom`.
    ///
    /// If some other watcher was moved to `slot` as a result, the moved watcher is returned.
    pub fn unwatch(
        &mut self,
        atom: Atom,
        slot: usize,
    ) -> Result<Option<Watcher>, err::ClauseDBError> {
        let Some(list) = self.lists.get_mut(atom as usize) else {
            return Err(err::ClauseDBError::CorruptWatch);
        };
        if slot >= list.len() {
            return Err(err::ClauseDBError::CorruptWatch);
        }

        list.swap_remove(slot);
        Ok(list.get(slot).copied())
    }

    /// The watchers of an atom.
    pub fn watchers(&self, atom: Atom) -> &[Watcher] {
        match self.lists.get(atom as usize) {
            Some(list) => list,
            None => &[],
        }
    }
}

/// Methods which keep the watches recorded in a clause in agreement with the watch lists.
impl<R: rand::Rng> GenericContext<R> {
    /// Adds a watcher for the head and for the tail of the clause at `key` to the relevant watch lists.
    pub fn register_watches(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        for side in [WatchSide::Head, WatchSide::Tail] {
            let atom = self.clause_db.get(&key)?.watched_atom(side);
            let slot = self.watches.watch(atom, Watcher { key, side })?;
            self.clause_db.get_mut(&key)?.set_slot(side, slot);
        }
        Ok(())
    }

    /// Moves the watch on `side` of the clause at `key` to `position`, transferring the watcher between watch lists.
    pub fn move_watch(
        &mut self,
        key: ClauseKey,
        side: WatchSide,
        position: usize,
    ) -> Result<(), err::ClauseDBError> {
        let db_clause = self.clause_db.get_mut(&key)?;
        let from_atom = db_clause.watched_atom(side);
        let from_slot = db_clause.slot(side);
        db_clause.set_watch(side, position);
        let to_atom = db_clause.watched_atom(side);

        if let Some(moved) = self.watches.unwatch(from_atom, from_slot)? {
            self.clause_db.get_mut(&moved.key)?.set_slot(moved.side, from_slot);
        }

        let slot = self.watches.watch(to_atom, Watcher { key, side })?;
        self.clause_db.get_mut(&key)?.set_slot(side, slot);

        log::trace!(target: targets::PROPAGATION, "{key} {side:?} watch moved from {from_atom} to {to_atom}");
        Ok(())
    }

    /// Updates the watches of the clause at `key` after `atom` has been valued.
    ///
    /// Each watch on `atom`, the head first, is moved to the first [candidate](crate::db::clause::db_clause::DbClause::watch_candidate), if there is one.
    /// Otherwise, the watch is left in place.
    pub fn on_assigned(&mut self, key: ClauseKey, atom: Atom) -> Result<(), err::ClauseDBError> {
        for side in [WatchSide::Head, WatchSide::Tail] {
            let db_clause = self.clause_db.get(&key)?;
            if db_clause.watched_atom(side) != atom {
                continue;
            }
            if let Some(position) = db_clause.watch_candidate(side, &self.atom_db) {
                self.move_watch(key, side, position)?;
            }
        }
        Ok(())
    }
}
