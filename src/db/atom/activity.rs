use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

/// Methods for inspecting and mutating the activity of atoms.
///
/// Together, these are a variant of VSIDS: atoms in learnt clauses are bumped, and the activity of every atom decays after each conflict.
impl AtomDB {
    /// The activity of an atom.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        self.activity.get(atom as usize).copied().unwrap_or_default()
    }

    /// Adds `amount` to the activity of an atom.
    pub fn bump(&mut self, atom: Atom, amount: Activity) {
        if let Some(activity) = self.activity.get_mut(atom as usize) {
            *activity += amount;
        }
    }

    /// Multiplies the activity of every atom by the decay factor.
    pub fn decay_all(&mut self) {
        let decay = self.decay;
        self.activity.iter_mut().for_each(|activity| *activity *= decay);
    }

    /// The unvalued atom with the greatest activity, with ties going to the least atom.
    pub fn select_next(&self) -> Option<Atom> {
        let mut best: Option<(Atom, Activity)> = None;

        for (atom, activity) in self.activity.iter().enumerate().skip(1) {
            if self.valuation[atom].is_some() {
                continue;
            }
            match best {
                Some((_, best_activity)) if *activity <= best_activity => {}
                _ => best = Some((atom as Atom, *activity)),
            }
        }

        best.map(|(atom, _)| atom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, db::atom::AtomDB};

    #[test]
    fn most_active_unvalued() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..4 {
            atom_db.fresh_atom(false).unwrap();
        }

        assert_eq!(atom_db.select_next(), Some(1));

        atom_db.bump(3, 0.5);
        atom_db.bump(4, 0.5);
        assert_eq!(atom_db.select_next(), Some(3));

        atom_db.set_value(3, 1, None).unwrap();
        assert_eq!(atom_db.select_next(), Some(4));

        atom_db.decay_all();
        assert!((atom_db.activity_of(4) - 0.49).abs() < 1e-12);

        for literal in [-1, -2, -4] {
            atom_db.set_value(literal, 1, None).unwrap();
        }
        assert_eq!(atom_db.select_next(), None);
    }
}
