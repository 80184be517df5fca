//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! heron_sat decides satisfiability by conflict-driven clause learning (CDCL): decisions are made on the most active atom, consequences are found by unit propagation over two watched literals per clause, and each conflict is analysed into a learnt clause which guides a backjump.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context is built from a [configuration](crate::config), clauses are added either [programatically](crate::context::GenericContext::add_clause), through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula, or from an [instance](crate::builder::batch::Instance) of the batch format.
//!
//! Internally, a solve is viewed as the manipulation of a handful of databases:
//! - The formula is stored in a [clause database](crate::db::clause).
//! - The valuation, decision levels, antecedents and activity of each atom are stored in an [atom database](crate::db::atom).
//! - The clauses watching each atom are stored in the [watch lists](crate::db::watches).
//! - The atoms assigned at each decision level are stored in the [level database](crate::db::level).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [configuration](crate::config) to see what may be tuned.
//!
//! # Examples
//!
//! + Solve a formula built programatically.
//!
//! ```rust
//! # use heron_sat::config::Config;
//! # use heron_sat::context::Context;
//! # use heron_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.ensure_atoms(3).is_ok());
//!
//! assert!(the_context.add_clause(vec![1]).is_ok());
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![-2, 3]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(3), Some(true));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use heron_sat::context::Context;
//! # use heron_sat::config::Config;
//! # use heron_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(&dimacs[..]).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with the targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), conflict analysis may be traced with `RUST_LOG=analysis=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;
