//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a [clause key](ClauseKey). \
//!     There are two kinds of clause:
//!     * Original clauses \
//!       Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file). \
//!       The collection of original clauses is the CNF formula whose satisfiability may be determined.
//!     * Added clauses \
//!       Clauses added to the context by conflict analysis.
//!       Every added clause is a consequence of the collection of original clauses.
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms.
//!     * Valuation, and the previous value of each atom.
//!     * The level and antecedent of each valued atom.
//!     * Activity.
//! - [Watch lists](crate::db::watches)
//!   + For each atom, the clauses which watch some literal on the atom.
//! - [The level database](crate::db::level)
//!   + The decision made at each level, together with the atoms valued at the level.
//! - [Consequence queue](crate::db::consequence_q)
//!   + Clauses to be examined for a consequence.

pub mod atom;
pub mod clause;
pub mod consequence_q;
mod keys;
pub use keys::*;
pub mod level;
pub mod watches;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// The index of a [decision level](crate::db::level).
pub type LevelIndex = u32;

impl<R: rand::Rng> GenericContext<R> {
    /// Records the value of the atom of `literal` at the current level, with the given antecedent.
    ///
    /// No antecedent marks the literal as a decision.
    pub fn record_assignment(
        &mut self,
        literal: CLiteral,
        antecedent: Option<ClauseKey>,
    ) -> Result<(), err::AtomDBError> {
        let level = self.level_db.current_level();

        match antecedent {
            Some(key) => {
                log::trace!(target: targets::VALUATION, "{literal} at level {level} from {key}")
            }
            None => log::trace!(target: targets::VALUATION, "{literal} at level {level} by decision"),
        }

        self.atom_db.set_value(literal, level, antecedent)?;
        self.level_db.record(literal.atom());
        Ok(())
    }
}
