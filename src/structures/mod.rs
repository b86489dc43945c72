//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are values: once built they are not mutated in place, and simplification of a formula always builds fresh clauses.
//!
//! # Formulas
//!
//! A [formula] 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//! - The empty formula is trivially satisfied.
//! - A formula containing the empty clause is unsatisfiable.
//!
//! # Languages
//!
//! A [language] is the set of [atoms](atom) of interest, typically those atoms appearing in an input formula, kept in the order each atom was first seen. \
//! The language of a solve is fixed at the start of the solve, and does not shrink as the formula is simplified.
//!
//! # Assignments
//!
//! An [assignment] is a set of literals, read as the (partial) valuation on which each literal in the set is true.

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod formula;
pub mod language;
pub mod literal;
