/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
A [Context] fixes the source of randomness to a [SmallRng](rand::rngs::SmallRng) seeded from the configuration, and so is the context intended for external use.

# Example
```rust
# use heron_sat::context::Context;
# use heron_sat::config::Config;
# use heron_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::db::{ClauseKey, LevelIndex};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the database is unknown.
    Solving,

    /// The database is known to be consistent, e.g. with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent, e.g. with an unsatisfiable clause identified.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A record of the most recent conflict: the clause found to be unsatisfied, and the level at which it was found.
///
/// A record is made during [propagation](crate::procedures::bcp) and cleared on [backtracking](crate::procedures::backjump).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub key: ClauseKey,
    pub level: LevelIndex,
}
