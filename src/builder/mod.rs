/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

In addition, [ensure_atoms](crate::context::GenericContext::ensure_atoms) extends the atoms of a context to some count, and [add_clause](crate::context::GenericContext::add_clause) extends the atoms of a context to include every atom of a clause added.
So, a clause may be given directly in terms of signed integers.

Formulas may also be read from [DIMACS](crate::context::GenericContext::read_dimacs), or from an [instance](batch::Instance) of the batch format.

# Examples

A clause built using basic methods.

```rust
# use heron_sat::context::Context;
# use heron_sat::config::Config;
# use heron_sat::reports::Report;
# use heron_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

The empty clause is unsatisfiable, and so makes the context unsatisfiable.

```rust
# use heron_sat::context::Context;
# use heron_sat::config::Config;
# use heron_sat::reports::Report;
# use heron_sat::structures::clause::CClause;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(CClause::new()).is_ok());
assert_eq!(the_context.report(), Report::Unsatisfiable);
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

pub mod batch;
mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// A fresh atom.
    ///
    /// The previous value of the atom is drawn with [polarity_lean](crate::config::Config::polarity_lean) as the probability of true.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let previous_value = self.rng.gen_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;
        self.watches.fresh_atom();
        Ok(atom)
    }

    /// Extends the atoms of the context so there are at least `count` atoms.
    pub fn ensure_atoms(&mut self, count: usize) -> Result<(), err::AtomDBError> {
        if count > ATOM_MAX as usize {
            return Err(err::AtomDBError::AtomsExhausted);
        }
        while self.atom_db.count() < count {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// - Any atom of the clause which is not part of the context is added to the context.
    /// - The activity of each atom of the clause is bumped by the reciprocal of the length of the clause.
    /// - An empty clause makes the context unsatisfiable, and is not stored.
    ///
    /// Clauses may only be added before a solve.
    pub fn add_clause(&mut self, clause: impl AsRef<[CLiteral]>) -> Result<(), ErrorKind> {
        if self.counters.solves > 0 {
            return Err(err::StateError::SolveInProgress.into());
        }

        let clause = clause.as_ref();

        if clause.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "Empty clause added");
            self.state = ContextState::Unsatisfiable;
            return Ok(());
        }
        if clause.contains(&0) {
            return Err(err::ClauseDBError::ZeroLiteral.into());
        }

        let greatest = clause.atoms().max().unwrap_or_default();
        self.ensure_atoms(greatest as usize)?;

        let bump = 1.0 / clause.len() as f64;
        for literal in clause {
            self.atom_db.bump(literal.atom(), bump);
        }

        let key = self
            .clause_db
            .store(clause.to_vec(), ClauseSource::Original, 0)?;
        self.register_watches(key)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        types::err::{ClauseDBError, ErrorKind, StateError},
    };

    #[test]
    fn initial_activity() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, -2]).is_ok());
        assert!(the_context.add_clause(vec![-1, 2, 4]).is_ok());

        assert_eq!(the_context.atom_count(), 4);
        assert!((the_context.atom_db.activity_of(1) - (0.5 + 1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(the_context.atom_db.activity_of(3), 0.0);
        assert_eq!(the_context.clause_db.original_count(), 2);
    }

    #[test]
    fn watched_on_store() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, 2, 3]).is_ok());
        assert!(the_context.add_clause(vec![-2]).is_ok());

        assert_eq!(the_context.watches.watchers(1).len(), 1);
        assert_eq!(the_context.watches.watchers(2).len(), 2);
        assert_eq!(the_context.watches.watchers(3).len(), 1);
    }

    #[test]
    fn rejected_clauses() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause(vec![1, 0]),
            Err(ErrorKind::ClauseDB(ClauseDBError::ZeroLiteral))
        );

        assert!(the_context.add_clause(vec![1]).is_ok());
        assert!(the_context.solve().is_ok());
        assert_eq!(
            the_context.add_clause(vec![-1]),
            Err(ErrorKind::State(StateError::SolveInProgress))
        );
    }
}
