//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use, and indicate some corruption of a database.
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//! - Parse errors are external, and note some issue with a formula given as input.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Parse(ParseError),
    State(StateError),

    /// A backjump was requested to a level above the current level.
    Backjump,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Analysis was requested without a conflict being recorded.
    NoConflict,

    /// Analysis was requested for a conflict found before any decision was made.
    ///
    /// A conflict at level zero is unsatisfiability of the formula, and there is nothing to learn.
    ConflictAtLevelZero,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// Some atom is not part of the database.
    UnknownAtom,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A key does not point to any clause.
    Missing,

    /// A clause contained `0`, which is not a literal.
    ZeroLiteral,

    /// A watch list does not contain the entry a clause expected.
    CorruptWatch,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value given to the named option lies outside of the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The input ended in the middle of an instance.
    UnexpectedEnd,

    /// A token which is not an integer, where an integer was required.
    BadToken(String),

    /// A count was negative.
    NegativeCount(i64),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors due to the state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Clauses may not be added once a solve has begun.
    SolveInProgress,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
