/*!
Methods for choosing the value of an atom.

# Overview

The atom chosen is the atom without a value with the greatest activity, with ties going to the least atom.
See [select_next](crate::db::atom::AtomDB::select_next).

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Phase saving

If phase saving is enabled, and a chosen atom was previously valued *v*, the atom is again valued *v*.

Note: An atom always has a 'previous' value, initialised via [Config::polarity_lean](crate::config::Config::polarity_lean) when the atom is created.
With the default lean of zero, an atom which has never had a value is valued false.

If phase saving is disabled, the value is chosen at random, with the probability of true given by [Config::polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::Rng;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng> GenericContext<R> {
    /// Makes a decision on the most active atom without a value, if there is such an atom.
    ///
    /// A fresh level is opened for the decision, the decision is recorded, and each clause watching the atom is notified.
    ///
    /// ```rust, ignore
    /// match self.make_decision()? {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> Result<DecisionOk, ErrorKind> {
        let Some(chosen_atom) = self.atom_db.select_next() else {
            return Ok(DecisionOk::Exhausted);
        };

        let value = match self.config.phase_saving.value {
            true => self.atom_db.previous_value_of(chosen_atom),
            false => self.rng.gen_bool(self.config.polarity_lean.value),
        };
        let decision = CLiteral::new(chosen_atom, value);

        self.counters.total_decisions += 1;
        let level = self.level_db.open(decision);
        log::trace!(target: targets::DECISION, "Decision {decision} opens level {level}");

        self.record_assignment(decision, None)?;
        self.notify_assigned(decision.atom())?;

        Ok(DecisionOk::Literal(decision))
    }
}
