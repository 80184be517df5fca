//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, though the [Clause] trait is implemented for any slice of literals.
//!
//! ```rust
//! # use heron_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3, 15];
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 0");
//!
//! let mut valuation = vec![None; 42];
//! valuation[15] = Some(true);
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order of the literals.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the valuation, indexed by atom.
    ///
    /// Atoms outside of the valuation are treated as having no value.
    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.iter().any(|literal| {
            valuation.get(literal.atom() as usize).copied().flatten() == Some(literal.polarity())
        })
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.as_slice().satisfied_on(valuation)
    }
}
