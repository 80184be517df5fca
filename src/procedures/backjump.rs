//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! # Methods
//!
//! # [backtrack](GenericContext::backtrack) --- Backtrack to a target level
//!
//! Every level above the target level is discarded.
//! The value of each atom valued at a discarded level is cleared (though kept as the previous value of the atom) and the consequence queue is cleared, together with any record of a conflict.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Backtracking to the current level clears the record of a conflict and the consequence queue, and nothing else.
//!
//! # [backjump_level](GenericContext::backjump_level) --- The backjump level of a clause
//!
//! The backjump level of a clause is the least non-zero level at which some atom of the clause was valued.
//!
//! A clause without a backjump level has been falsified without any decision, and so the formula is unsatisfiable.
//!
//! A backjump *to* level *b* discards level *b* together with every level above *b*.
//! So, to backjump to the backjump level *b* of a clause a solve [backtracks](GenericContext::backtrack) to *b - 1*, and the next decision opens level *b* afresh.
//!
//! # Example
//!
//! ```rust,ignore
//! if let Some(backjump) = self.backjump_level(&clause) {
//!     self.backtrack(backjump - 1)?;
//! }
//! ```
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Backtracks to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backtrack(&mut self, target: LevelIndex) -> Result<(), ErrorKind> {
        let current = self.level_db.current_level();
        if target > current {
            log::error!(target: targets::BACKJUMP, "Backtrack from {current} to {target}");
            return Err(ErrorKind::Backjump);
        }
        log::trace!(target: targets::BACKJUMP, "Backtrack from {current} to {target}");

        while self.level_db.current_level() > target {
            if let Some(frame) = self.level_db.pop() {
                for atom in frame.assigned() {
                    self.atom_db.clear_value(*atom);
                }
            }
        }

        self.conflict = None;
        self.clear_q();
        Ok(())
    }

    /// The backjump level of a clause, if one exists.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump_level(&self, clause: &[CLiteral]) -> Option<LevelIndex> {
        clause
            .iter()
            .filter_map(|literal| self.atom_db.level_of(literal.atom()))
            .filter(|level| *level > 0)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, types::err::ErrorKind};

    fn decide_each(the_context: &mut Context, decisions: &[i32]) {
        for decision in decisions {
            the_context.level_db.open(*decision);
            assert!(the_context.record_assignment(*decision, None).is_ok());
            assert!(the_context.notify_assigned(decision.unsigned_abs()).is_ok());
            assert!(the_context.propagate().is_ok());
        }
    }

    #[test]
    fn backtrack_clears_levels_above() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![-2, 3]).is_ok());
        assert!(the_context.ensure_atoms(4).is_ok());

        decide_each(&mut the_context, &[1, 2, -4]);
        assert_eq!(the_context.value_of(3), Some(true));
        assert_eq!(the_context.level_db.current_level(), 3);

        assert!(the_context.backtrack(1).is_ok());
        assert_eq!(the_context.level_db.current_level(), 1);
        assert_eq!(the_context.level_db.decisions().collect::<Vec<_>>(), vec![1]);
        assert_eq!(the_context.value_of(1), Some(true));
        assert_eq!(the_context.value_of(2), None);
        assert_eq!(the_context.value_of(3), None);
        assert_eq!(the_context.atom_db.antecedent_of(3), None);
        assert_eq!(the_context.value_of(4), None);

        assert!(!the_context.atom_db.previous_value_of(4));
        assert!(the_context.atom_db.previous_value_of(3));
    }

    #[test]
    fn backtrack_is_idempotent() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(3).is_ok());
        decide_each(&mut the_context, &[1, -2, 3]);

        assert!(the_context.backtrack(1).is_ok());
        let once = the_context.valuation().to_vec();
        assert!(the_context.backtrack(1).is_ok());

        assert_eq!(the_context.valuation(), once.as_slice());
        assert_eq!(the_context.level_db.current_level(), 1);
    }

    #[test]
    fn backtrack_above_current() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.backtrack(2), Err(ErrorKind::Backjump));
    }

    #[test]
    fn least_positive_level() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![5]).is_ok());
        assert!(the_context.record_assignment(5, None).is_ok());

        decide_each(&mut the_context, &[1, 2, 3]);

        assert_eq!(the_context.backjump_level(&[-3, -2, -5]), Some(2));
        assert_eq!(the_context.backjump_level(&[-5]), None);
        assert_eq!(the_context.backjump_level(&[-4]), None);
    }
}
