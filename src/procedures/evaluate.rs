//! Evaluation of a formula on an assignment.
//!
//! A clause is true on an assignment if some literal of the clause is in the assignment, and a formula is true on an assignment if every clause of the formula is true.
//!
//! Evaluation is independent of the [search](crate::procedures::solve), and so may be used to check a model found by a search.
//!
//! ```rust
//! # use dpll_sat::procedures::evaluate::evaluate;
//! # use dpll_sat::structures::{formula::Formula, literal::CLiteral};
//! let formula = Formula::from_ints(&[&[1, -3], &[2, 3, -1]]);
//!
//! assert!(evaluate(&formula, &[1, 2, -3].map(CLiteral::from)));
//! assert!(!evaluate(&formula, &[1, -2, -3].map(CLiteral::from)));
//! ```

use std::collections::HashSet;

use crate::structures::{
    clause::Clause,
    formula::Formula,
    literal::CLiteral,
};

/// Whether every clause of `formula` contains some literal of `model`.
///
/// Atoms without a literal in `model` do not make any literal true, and so a model should be full.
pub fn evaluate(formula: &Formula, model: &[CLiteral]) -> bool {
    let true_literals: HashSet<&CLiteral> = model.iter().collect();

    formula.clauses().iter().all(|clause| {
        clause
            .literals()
            .any(|literal| true_literals.contains(literal))
    })
}
