/*!
Analysis of an unsatisfiable clause.

Takes the recorded conflict (a clause which is unsatisfiable on the current valuation, and the level at which this was found) and derives a clause from the conflict by resolution.

# Overview

The working clause is initially the conflict clause.
Then, so long as the working clause contains more than one literal whose atom was valued at the level of the conflict:
- The first such literal whose value was derived from some clause is taken as the pivot.
  Before any resolution the working clause is in the order of the conflict clause (without repeated literals), and after a resolution the literals are in order as integers.
- The working clause is resolved with the antecedent of the pivot: the literals of the two clauses are combined, and any literal whose negation appears in the antecedent is dropped, together with the negation.

Resolution stops early if no literal valued at the level of the conflict was derived.

On the resulting clause:
- The LBD of the clause is the number of distinct non-zero levels among the atoms of the clause.
- The activity of each atom of the clause is bumped by `lbd_bump_base` raised to the negated LBD.
- The [backjump level](crate::procedures::backjump) of the clause is found.
  If the clause has no backjump level every literal of the clause was valued at level zero, and so the formula is unsatisfiable.
- Otherwise, the clause is stored (without any literal valued at level zero) and watched, and the activity of every atom decays.

Literals valued at level zero are dropped from the stored clause, as the value of the atom of such a literal holds for the remainder of the solve.
Keeping such a literal would risk a watch on the literal which is never notified of a change in value.

For the method, see: [conflict_analysis](GenericContext::conflict_analysis).

# Example

```rust, ignore
match self.conflict_analysis()? {
    AnalysisResult::Unsatisfiable => {
        self.state = ContextState::Unsatisfiable;
        ...
    }

    AnalysisResult::Learnt { key, backjump } => {
        self.backtrack(backjump - 1)?;
        ...
    }
}
```

# Literature

The approach to resolution is a rough approximation to resolving to the first unique implication point.
For a discussion of unique implication points, see [Efficient Conflict Driven Learning in a Boolean Satisfiability Solver](https://doi.org/10.1109/ICCAD.2001.968634).

The use of LBD follows [Predicting Learnt Clauses Quality in Modern SAT Solvers](https://www.ijcai.org/Proceedings/09/Papers/074.pdf).
*/

use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The derived clause is falsified at level zero, and so the formula is unsatisfiable.
    Unsatisfiable,

    /// A clause was learnt and stored, with the given backjump level.
    Learnt {
        key: ClauseKey,
        backjump: LevelIndex,
    },
}

impl<R: rand::Rng> GenericContext<R> {
    /// Analysis of the recorded conflict.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self) -> Result<AnalysisResult, ErrorKind> {
        let Some(conflict) = self.conflict else {
            log::error!(target: targets::ANALYSIS, "Analysis without a conflict");
            return Err(err::AnalysisError::NoConflict.into());
        };
        if conflict.level == 0 {
            return Err(err::AnalysisError::ConflictAtLevelZero.into());
        }

        let mut seen = BTreeSet::default();
        let mut working: CClause = self
            .clause_db
            .get(&conflict.key)?
            .literals()
            .copied()
            .filter(|literal| seen.insert(*literal))
            .collect();
        log::trace!(target: targets::ANALYSIS, "Analysis of {} at level {}", conflict.key, conflict.level);

        loop {
            let mut at_level = 0;
            let mut pivot = None;

            for literal in &working {
                if self.atom_db.level_of(literal.atom()) == Some(conflict.level) {
                    at_level += 1;
                    if pivot.is_none() {
                        if let Some(key) = self.atom_db.antecedent_of(literal.atom()) {
                            pivot = Some((*literal, key));
                        }
                    }
                }
            }

            let Some((pivot, antecedent_key)) = pivot else {
                break;
            };
            if at_level <= 1 {
                break;
            }

            let antecedent = self.clause_db.get(&antecedent_key)?;
            working = resolve(&working, pivot, antecedent.literals().copied())
                .into_iter()
                .collect();
            log::trace!(target: targets::ANALYSIS, "Resolved on {pivot} with {antecedent_key}");
        }

        let lbd = self.literal_block_distance(working.iter().copied());
        let bump = self.config.lbd_bump_base.value.powi(-(lbd as i32));
        for literal in &working {
            self.atom_db.bump(literal.atom(), bump);
        }

        let Some(backjump) = self.backjump_level(&working) else {
            log::info!(target: targets::ANALYSIS, "Unsatisfiable, as {} is false at level zero", working.as_dimacs(false));
            return Ok(AnalysisResult::Unsatisfiable);
        };

        let learnt = working
            .into_iter()
            .filter(|literal| self.atom_db.level_of(literal.atom()) != Some(0))
            .collect::<CClause>();
        log::info!(target: targets::ANALYSIS, "Learnt {} with lbd {lbd}", learnt.as_dimacs(false));

        let key = self.clause_db.store(learnt, ClauseSource::Resolution, lbd)?;
        self.register_watches(key)?;

        self.atom_db.decay_all();

        Ok(AnalysisResult::Learnt { key, backjump })
    }

    /// The count of distinct (non-zero) levels at which the atoms of the given literals were valued.
    pub fn literal_block_distance(&self, literals: impl Iterator<Item = CLiteral>) -> u32 {
        literals
            .filter_map(|literal| self.atom_db.level_of(literal.atom()))
            .filter(|level| *level > 0)
            .collect::<BTreeSet<_>>()
            .len() as u32
    }
}

/// The resolvent of the working clause and an antecedent on a pivot.
///
/// Each literal of the working clause is added to the literals of the antecedent, unless the literal is the pivot or the negation of the literal is part of the antecedent, in which case the negation is removed.
fn resolve(
    working: &[CLiteral],
    pivot: CLiteral,
    antecedent: impl Iterator<Item = CLiteral>,
) -> BTreeSet<CLiteral> {
    let mut resolvent: BTreeSet<CLiteral> = antecedent.collect();

    for literal in working {
        if *literal == pivot || resolvent.contains(&literal.negate()) {
            resolvent.remove(&literal.negate());
        } else {
            resolvent.insert(*literal);
        }
    }

    resolvent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config, context::Context, db::clause::db_clause::ClauseStatus,
        types::err::BCPError,
    };

    #[test]
    fn resolution_cancels_pivot() {
        let resolvent = resolve(&[-3, -2, 4], -2, [1, 2, -5].into_iter());

        assert_eq!(resolvent, BTreeSet::from([-5, -3, 1, 4]));
    }

    #[test]
    fn learnt_from_two_levels() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![-1, -2, 3]).is_ok());
        assert!(the_context.add_clause(vec![-1, -2, -3]).is_ok());

        for decision in [1, 2] {
            the_context.level_db.open(decision);
            assert!(the_context.record_assignment(decision, None).is_ok());
            assert!(the_context.notify_assigned(decision.unsigned_abs()).is_ok());
        }

        assert!(matches!(
            the_context.propagate(),
            Err(ErrorKind::BCP(BCPError::Conflict(_)))
        ));

        let result = the_context.conflict_analysis();
        let Ok(AnalysisResult::Learnt { key, backjump }) = result else {
            panic!("expected a learnt clause, found {result:?}");
        };

        // -3 was derived at level 2 from [-1, -2, 3], and resolving leaves the two decisions.
        let learnt = the_context.clause_db.get(&key).unwrap();
        assert_eq!(learnt.clause(), &vec![-2, -1]);
        assert_eq!(learnt.lbd(), 2);
        assert_eq!(learnt.source(), ClauseSource::Resolution);
        assert_eq!(backjump, 1);

        assert!(the_context.backtrack(backjump - 1).is_ok());
        let status = the_context.clause_db.get(&key).unwrap().status(&the_context.atom_db);
        assert_ne!(status, ClauseStatus::Unsatisfied);
    }

    #[test]
    fn first_pivot_in_clause_order() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![-4, 5]).is_ok());
        assert!(the_context.add_clause(vec![-5, 6]).is_ok());
        assert!(the_context.add_clause(vec![-5, -6]).is_ok());

        the_context.level_db.open(4);
        assert!(the_context.record_assignment(4, None).is_ok());
        assert!(the_context.notify_assigned(4).is_ok());
        assert!(matches!(
            the_context.propagate(),
            Err(ErrorKind::BCP(BCPError::Conflict(_)))
        ));

        let result = the_context.conflict_analysis();
        let Ok(AnalysisResult::Learnt { key, backjump }) = result else {
            panic!("expected a learnt clause, found {result:?}");
        };

        // Resolution on -5 first continues back to the decision, while resolution on -6 first would stop at [-5].
        let learnt = the_context.clause_db.get(&key).unwrap();
        assert_eq!(learnt.clause(), &vec![-4]);
        assert_eq!(learnt.lbd(), 1);
        assert_eq!(backjump, 1);
    }

    #[test]
    fn no_conflict() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.conflict_analysis(),
            Err(ErrorKind::Analysis(err::AnalysisError::NoConflict))
        );
    }
}
