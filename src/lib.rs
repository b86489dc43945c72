//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat decides satisfiability by the Davis--Putnam--Logemann--Loveland procedure: a depth-first search over the values of atoms, where each step of the search simplifies the formula by unit propagation and pure literal elimination.
//!
//! The library is small, and is intended to be read as much as used.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration.
//! Clauses may be added though the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is a recursion over values:
//! - A formula is a sequence of clauses.
//! - An assignment is a set of literals.
//! - Each step of the search builds a fresh formula and assignment from those given.
//!
//! Useful starting points, then, may be:
//! - The [search](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [simplification procedures](crate::procedures) used at each step of the search.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Solve a formula, and check the model found.
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::procedures::evaluate::evaluate;
//! # use dpll_sat::reports::Report;
//! # use dpll_sat::structures::literal::CLiteral;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause([1, -3].map(CLiteral::from)).is_ok());
//! assert!(the_context.add_clause([2, 3, -1].map(CLiteral::from)).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! let model = the_context.model().expect("no model");
//! assert!(evaluate(&the_context.formula, &model));
//! ```
//!
//! + Use the procedures directly, with a deterministic choice of atom.
//!
//! ```rust
//! # use dpll_sat::procedures::{decision::LexicographicDecision, solve::{solve, Outcome}};
//! # use dpll_sat::structures::formula::Formula;
//! let formula = Formula::from_ints(&[&[1], &[2]]);
//!
//! match solve(&formula, &mut LexicographicDecision, 64) {
//!     Ok(Outcome::Satisfiable(assignment)) => assert_eq!(assignment.to_string(), "{1, 2}"),
//!     _ => panic!("unexpected result"),
//! }
//! ```
//!
//! + Find (a count of) all models of a formula, by blocking each model found.
//!
//! ```rust
//! # use dpll_sat::config::{Config, DecisionPolicy};
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let mut config = Config::default();
//! config.decision.value = DecisionPolicy::Lexicographic;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.add_clause([1, 2].map(CLiteral::from)).is_ok());
//!
//! let mut count = 0;
//! while the_context.solve() == Ok(Report::Satisfiable) {
//!     count += 1;
//!     let model = the_context.model().expect("no model");
//!     let block = model.iter().map(|literal| literal.negate()).collect::<Vec<_>>();
//!     assert!(the_context.add_clause(block).is_ok());
//! }
//!
//! assert_eq!(count, 3);
//! ```
//!
//! # Logs
//!
//! Logs are made through the [log] facade, with targets listed in [misc::log::targets].
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

pub mod reports;
