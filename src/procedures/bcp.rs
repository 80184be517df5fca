/*!
Context methods for boolean constraint propagation.

# Overview

Propagation is split in two:

- [notify_assigned](GenericContext::notify_assigned) is called whenever an atom is valued.
  The watches of each clause watching the atom are updated, and the status of the clause is calculated.
  A clause which is unit is pushed to the [consequence queue](crate::db::consequence_q).
  A clause which is unsatisfied is recorded as the conflict of the context, and is also pushed to the queue.

- [propagate](GenericContext::propagate) pops clauses from the queue until the queue is empty or a conflict is found.
  The status of each clause is recalculated, as the valuation may have changed since the clause was queued.
  If the clause remains unit, the literal of the clause which is not false is assigned at the current level, with the clause as the antecedent, and the atom of the literal is notified.
  If the clause is unsatisfied, the queue is cleared and the conflict is returned as an error.
  Otherwise, the clause was queued more than once, or was satisfied by some other propagation, and is dropped.

# Complications

Updating the watches of a clause may move watchers between watch lists, including the watch list of the atom being notified.
So, notification is made over a copy of the watch list taken before any watch is updated.
This is (roughly) the cost of avoiding some unsafe access to the list.

# Example

```rust,ignore
match self.propagate() {
    Err(ErrorKind::BCP(err::BCPError::Conflict(key))) => {
        let analysis_result = self.conflict_analysis()?;
        ...
    }
    Ok(()) => self.make_decision()?,
    Err(e) => return Err(e),
}
```
*/

use crate::{
    context::{Conflict, GenericContext},
    db::clause::db_clause::ClauseStatus,
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Updates each clause watching `atom`, queuing any clause which is unit or unsatisfied.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn notify_assigned(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        let watchers = self.watches.watchers(atom).to_vec();

        for watcher in watchers {
            let key = watcher.key;
            self.on_assigned(key, atom)?;

            match self.clause_db.get(&key)?.status(&self.atom_db) {
                ClauseStatus::Unit => self.enqueue(key),

                ClauseStatus::Unsatisfied => {
                    let level = self.level_db.current_level();
                    log::trace!(target: targets::PROPAGATION, "{key} unsatisfied at level {level}");
                    self.conflict = Some(Conflict { key, level });
                    self.enqueue(key);
                }

                ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
            }
        }

        Ok(())
    }

    /// Propagates queued clauses until the queue is exhausted, or a conflict is found.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self) -> Result<(), ErrorKind> {
        while let Some(key) = self.consequence_q.pop_front() {
            let db_clause = self.clause_db.get(&key)?;

            match db_clause.status(&self.atom_db) {
                ClauseStatus::Unit => {
                    let literal = db_clause.unit_value(&self.atom_db);
                    log::trace!(target: targets::PROPAGATION, "{literal} from {key}");

                    self.record_assignment(literal, Some(key))?;
                    self.counters.total_propagations += 1;
                    self.notify_assigned(literal.atom())?;
                }

                ClauseStatus::Unsatisfied => {
                    let level = self.level_db.current_level();
                    let conflict = *self.conflict.get_or_insert(Conflict { key, level });
                    self.clear_q();
                    return Err(err::BCPError::Conflict(conflict.key).into());
                }

                ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        structures::clause::Clause,
        types::err::{BCPError, ErrorKind},
    };

    #[test]
    fn chain() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![-1, 2]).is_ok());
        assert!(the_context.add_clause(vec![-2, 3]).is_ok());
        assert!(the_context.add_clause(vec![-3, -4, 5]).is_ok());

        the_context.level_db.open(1);
        assert!(the_context.record_assignment(1, None).is_ok());
        assert!(the_context.notify_assigned(1).is_ok());
        assert!(the_context.propagate().is_ok());

        assert_eq!(the_context.value_of(2), Some(true));
        assert_eq!(the_context.value_of(3), Some(true));
        assert_eq!(the_context.value_of(4), None);
        assert_eq!(the_context.atom_db.level_of(3), Some(1));
        assert!(the_context.consequence_q.is_empty());
    }

    #[test]
    fn conflict() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![-1, 2]).is_ok());
        assert!(the_context.add_clause(vec![-1, -2]).is_ok());

        the_context.level_db.open(1);
        assert!(the_context.record_assignment(1, None).is_ok());
        assert!(the_context.notify_assigned(1).is_ok());

        let result = the_context.propagate();
        let Err(ErrorKind::BCP(BCPError::Conflict(key))) = result else {
            panic!("expected a conflict, found {result:?}");
        };

        let conflict = the_context.conflict.expect("conflict record");
        assert_eq!(conflict.key, key);
        assert_eq!(conflict.level, 1);
        assert!(the_context.consequence_q.is_empty());

        let conflict_clause = the_context.clause_db.get(&key).unwrap();
        assert!(conflict_clause
            .literals()
            .all(|literal| the_context.atom_db.is_falsified(*literal)));
    }

    #[test]
    fn confluence() {
        // The same fixpoint is reached from either order of deciding 1 and 4.
        let clauses = vec![
            vec![-1, 2, 6],
            vec![-2, 3],
            vec![-4, -6],
            vec![-4, 5],
            vec![-3, -5, 7],
        ];

        let fixpoint = |order: [i32; 2]| {
            let mut the_context = Context::from_config(Config::default());
            for clause in &clauses {
                assert!(the_context.add_clause(clause.clone()).is_ok());
            }
            for literal in order {
                the_context.level_db.open(literal);
                assert!(the_context.record_assignment(literal, None).is_ok());
                assert!(the_context.notify_assigned(literal.unsigned_abs()).is_ok());
                assert!(the_context.propagate().is_ok());
            }
            the_context.valuation().to_vec()
        };

        let forwards = fixpoint([1, 4]);
        assert_eq!(forwards, fixpoint([4, 1]));
        assert_eq!(
            forwards,
            vec![
                None,
                Some(true),
                Some(true),
                Some(true),
                Some(true),
                Some(true),
                Some(false),
                Some(true)
            ]
        );
    }
}
