//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](GenericContext::solve) alternates between [propagation](crate::procedures::bcp) and either a [decision](crate::procedures::decision) or [analysis](crate::procedures::analysis) of a conflict.
//!
//! - Initially, each clause which is unit (i.e. each clause of a single literal) is queued, and propagated at level zero.
//! - If propagation exhausts the queue without conflict:
//!   + If every atom has a value, the formula is satisfiable.
//!   + Otherwise, a decision is made.
//! - If propagation finds a conflict:
//!   + If the conflict is at level zero, the formula is unsatisfiable.
//!   + Otherwise, a clause is learnt through analysis of the conflict and the solve backjumps.
//!     If the learnt clause is unit after the backjump, the solve returns to level zero and propagates the clause.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> satisfiable, if every atom has a value
//!   |       +---------------+
//!   |               ⌃
//!   |               | if propagation exhausts the queue
//!   ⌄               |
//! --+-->+-----------+---+
//!   ⌃   |   propagate   |-----> unsatisfiable, if a conflict is found at level zero
//!   |   +---------------+
//!   |               |
//!   |               | if a conflict is found
//!   |               ⌄
//!   |       +-------------------+
//!   +-------| analysis/backjump |-----> unsatisfiable, if the learnt clause is false at level zero
//!           +-------------------+
//! ```
//!
//! # Restarts
//!
//! Restarts follow a [geometric schedule](crate::generic::geometric).
//! After a clause is learnt, if the count of conflicts has reached the goal of the schedule the backjump level is forced to level one --- so every decision is discarded.
//! A backjump to level one which happens without being forced resets the count, as it has the same effect as a restart.
//! In either case, the conflict is then counted.
//!
//! # Example
//!
//! ```rust
//! # use heron_sat::config::Config;
//! # use heron_sat::context::Context;
//! # use heron_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![1, -2]).is_ok());
//! assert!(the_context.add_clause(vec![1, 2]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.valuation_string(), "1 2");
//!
//! // A second solve gives the same report.
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```
//!
//! # Literature
//!
//! The core solve procedure follows the presentation of CDCL given in the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2), chapter 4.

use crate::{
    context::{ContextState, GenericContext},
    db::clause::db_clause::ClauseStatus,
    misc::log::targets::{self},
    procedures::{analysis::AnalysisResult, decision::DecisionOk},
    reports::Report,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Solving | ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
        }

        let total_time = std::time::Instant::now();
        self.counters.solves += 1;
        self.state = ContextState::Solving;

        let result = self.solve_given();
        self.counters.time = total_time.elapsed();

        match result {
            Ok(report) => {
                log::info!(target: targets::RESTART, "{report} after {} conflicts and {} restarts", self.counters.total_conflicts, self.counters.restarts);
                Ok(report)
            }
            Err(e) => {
                log::error!("Solve failed: {e:?}");
                Err(e)
            }
        }
    }

    fn solve_given(&mut self) -> Result<Report, ErrorKind> {
        if self.clause_db.total_count() == 0 {
            self.state = ContextState::Satisfiable;
            return Ok(Report::Satisfiable);
        }

        let keys = self.clause_db.all_keys().collect::<Vec<_>>();
        for key in keys {
            if self.clause_db.get(&key)?.status(&self.atom_db) == ClauseStatus::Unit {
                self.enqueue(key);
            }
        }

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            match self.propagate() {
                Ok(()) => match self.make_decision()? {
                    DecisionOk::Literal(_) => continue 'solve_loop,
                    DecisionOk::Exhausted => {
                        self.state = ContextState::Satisfiable;
                        return Ok(Report::Satisfiable);
                    }
                },

                Err(ErrorKind::BCP(err::BCPError::Conflict(key))) => {
                    self.counters.total_conflicts += 1;

                    if self.level_db.current_level() == 0 {
                        log::info!(target: targets::ANALYSIS, "Conflict of {key} at level zero");
                        self.state = ContextState::Unsatisfiable;
                        return Ok(Report::Unsatisfiable);
                    }

                    let (key, mut backjump) = match self.conflict_analysis()? {
                        AnalysisResult::Unsatisfiable => {
                            self.state = ContextState::Unsatisfiable;
                            return Ok(Report::Unsatisfiable);
                        }
                        AnalysisResult::Learnt { key, backjump } => (key, backjump),
                    };

                    if backjump == 1 {
                        self.counters.restart_schedule.reset();
                    } else if self.config.restart.value && self.counters.restart_schedule.restart_due() {
                        log::trace!(target: targets::RESTART, "Restart forced at backjump level {backjump}");
                        self.counters.restarts += 1;
                        backjump = 1;
                    }
                    self.counters.restart_schedule.count();

                    self.backtrack(backjump - 1)?;

                    if self.clause_db.get(&key)?.status(&self.atom_db) == ClauseStatus::Unit {
                        self.backtrack(0)?;
                        self.enqueue(key);
                    }
                }

                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, reports::Report};

    #[test]
    fn restarts_are_counted() {
        let mut config = Config::default();
        config.restart_goal.value = 1;
        config.restart_growth.value = 1.0;

        let mut the_context = Context::from_config(config);
        let n = 5;
        // Pigeonhole: n pigeons, n - 1 holes.
        let atom = |pigeon: i32, hole: i32| pigeon * (n - 1) + hole + 1;
        for pigeon in 0..n {
            assert!(the_context
                .add_clause((0..n - 1).map(|hole| atom(pigeon, hole)).collect::<Vec<_>>())
                .is_ok());
        }
        for hole in 0..n - 1 {
            for a in 0..n {
                for b in (a + 1)..n {
                    assert!(the_context
                        .add_clause(vec![-atom(a, hole), -atom(b, hole)])
                        .is_ok());
                }
            }
        }

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(the_context.counters.total_conflicts > 0);
        assert!(the_context.counters.restarts <= the_context.counters.total_conflicts);
        assert_eq!(the_context.counters.restart_schedule.goal(), 1);
        // The last learnt clause was counted, after any reset.
        assert!(the_context.counters.restart_schedule.counter() >= 1);
    }
}
