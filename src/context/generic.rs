use crate::{
    config::Config,
    db::{
        atom::AtomDB, clause::ClauseDB, consequence_q::ConsequenceQ, level::LevelDB,
        watches::Watches,
    },
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use super::{Conflict, ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use heron_sat::context::GenericContext;
/// # use heron_sat::config::Config;
/// # use rand::rngs::SmallRng;
/// let context = GenericContext::<SmallRng>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// Watch lists for each atom.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The level database.
    /// See [db::level](crate::db::level) for details.
    pub level_db: LevelDB,

    /// The consequence queue.
    /// See [db::consequence_q](crate::db::consequence_q) for details.
    pub consequence_q: ConsequenceQ,

    /// The most recent conflict, if any.
    pub conflict: Option<Conflict>,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of the atoms in the context.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// The value of an atom on the current valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The current valuation, indexed by atoms (with index zero unused).
    pub fn valuation(&self) -> &[Option<bool>] {
        self.atom_db.valuation()
    }

    /// The current valuation, as a literal for each atom.
    ///
    /// An atom without a value is given the value it would be given by a decision with phase saving, as such an atom is unconstrained.
    pub fn model(&self) -> Vec<CLiteral> {
        (1..=self.atom_db.count() as Atom)
            .map(|atom| {
                let value = self
                    .atom_db
                    .value_of(atom)
                    .unwrap_or(self.atom_db.previous_value_of(atom));
                CLiteral::new(atom, value)
            })
            .collect()
    }

    /// The current valuation, as a string of literals separated by spaces.
    pub fn valuation_string(&self) -> String {
        self.model()
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
