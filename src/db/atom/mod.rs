/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation, and the previous value of each atom.
- A record of the level at which an atom was valued, and the clause from which the value was derived (if any).
- The activity of each atom, as used to [choose](AtomDB::select_next) an atom when making a decision.

Each of these is stored in a vector indexed by atoms.
As there is no atom zero, index zero of each vector is unused.
This allows the valuation to be passed to methods such as [satisfied_on](crate::structures::clause::Clause::satisfied_on) without translation.

```rust
# use heron_sat::config::Config;
# use heron_sat::db::atom::AtomDB;
# use heron_sat::structures::literal::{CLiteral, Literal};
let mut atom_db = AtomDB::new(&Config::default());
let p = atom_db.fresh_atom(false).expect("fresh atom");
let q = atom_db.fresh_atom(false).expect("fresh atom");

assert!(atom_db.set_value(CLiteral::new(p, true), 0, None).is_ok());

assert!(atom_db.is_satisfied(CLiteral::new(p, true)));
assert!(atom_db.is_falsified(CLiteral::new(p, false)));
assert_eq!(atom_db.value_of(q), None);
assert_eq!(atom_db.valuation(), &[None, Some(true), None]);
```
*/

#[doc(hidden)]
pub mod activity;

use crate::{
    config::{Activity, Config},
    db::{ClauseKey, LevelIndex},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

/// The atom database.
pub struct AtomDB {
    /// The current (often partial) valuation, indexed by atoms.
    valuation: Vec<Option<bool>>,

    /// The previous value of each atom, or the initial value given to a fresh atom.
    previous_valuation: Vec<bool>,

    /// The level at which an atom was valued.
    levels: Vec<Option<LevelIndex>>,

    /// The clause from which the value of an atom was derived.
    /// No antecedent for a valued atom marks a decision.
    antecedents: Vec<Option<ClauseKey>>,

    /// The activity of each atom.
    activity: Vec<Activity>,

    /// The factor by which activity decays.
    decay: Activity,

    /// A count of the atoms without a value.
    unvalued: usize,
}

impl AtomDB {
    /// A new [AtomDB], without any atoms, with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: vec![None],
            previous_valuation: vec![false],
            levels: vec![None],
            antecedents: vec![None],
            activity: vec![0.0],
            decay: config.activity_decay.value,
            unvalued: 0,
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len() - 1
    }

    /// A fresh atom, without a value, zero activity, and `previous_value` as the previous value.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.antecedents.push(None);
        self.activity.push(0.0);
        self.unvalued += 1;

        Ok(atom)
    }

    /// The current valuation, indexed by atoms.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The value of an atom, if the atom has a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The value an atom had before the atom was last cleared.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation
            .get(atom as usize)
            .copied()
            .unwrap_or_default()
    }

    /// The level at which an atom was valued, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// The clause from which the value of an atom was derived, if the value was derived.
    pub fn antecedent_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.antecedents.get(atom as usize).copied().flatten()
    }

    /// Whether the literal is true on the current valuation.
    pub fn is_satisfied(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }

    /// Whether the literal is false on the current valuation.
    pub fn is_falsified(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(!literal.polarity())
    }

    /// A count of the atoms without a value.
    pub fn unvalued_count(&self) -> usize {
        self.unvalued
    }

    /// Values the atom of `literal` to the polarity of `literal`, at `level`, and with the antecedent (if any).
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        antecedent: Option<ClauseKey>,
    ) -> Result<(), AtomDBError> {
        let atom = literal.atom() as usize;
        if atom == 0 || atom >= self.valuation.len() {
            return Err(AtomDBError::UnknownAtom);
        }

        if self.valuation[atom].is_none() {
            self.unvalued -= 1;
        }
        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = Some(level);
        self.antecedents[atom] = antecedent;

        Ok(())
    }

    /// Clears the value of an atom.
    ///
    /// The value is kept as the previous value of the atom.
    pub fn clear_value(&mut self, atom: Atom) {
        let atom = atom as usize;
        if let Some(Some(value)) = self.valuation.get(atom).copied() {
            self.previous_valuation[atom] = value;
            self.valuation[atom] = None;
            self.levels[atom] = None;
            self.antecedents[atom] = None;
            self.unvalued += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_saves_phase() {
        let mut atom_db = AtomDB::new(&Config::default());
        let p = atom_db.fresh_atom(false).unwrap();
        assert_eq!(atom_db.unvalued_count(), 1);

        atom_db.set_value(CLiteral::new(p, true), 3, None).unwrap();
        assert_eq!(atom_db.unvalued_count(), 0);
        assert_eq!(atom_db.level_of(p), Some(3));

        atom_db.clear_value(p);
        assert_eq!(atom_db.value_of(p), None);
        assert_eq!(atom_db.level_of(p), None);
        assert!(atom_db.previous_value_of(p));
        assert_eq!(atom_db.unvalued_count(), 1);

        atom_db.clear_value(p);
        assert_eq!(atom_db.unvalued_count(), 1);
    }

    #[test]
    fn unknown_atoms() {
        let mut atom_db = AtomDB::new(&Config::default());
        assert_eq!(
            atom_db.set_value(1, 0, None),
            Err(AtomDBError::UnknownAtom)
        );
        assert_eq!(atom_db.value_of(7), None);
    }
}
