//! Pure literal elimination.
//!
//! A literal is *pure* with respect to a formula if the negation of the literal does not occur in any clause of the formula.
//! A pure literal may be made true without falsifying any clause, and so every clause which contains a pure literal may be removed.
//!
//! As with [unit propagation](crate::procedures::unit), elimination is a single pass: the pure literals are identified at the start of the pass, and any literal made pure by the removal of some clause is left for the next pass.
//!
//! ```rust
//! # use dpll_sat::procedures::pure::pure_elimination;
//! # use dpll_sat::structures::{assignment::Assignment, formula::Formula};
//! let formula = Formula::from_ints(&[&[1, 4, -8], &[3, 1, 5], &[8, -4]]);
//! let mut assignment = Assignment::default();
//!
//! let reduced = pure_elimination(&formula, &mut assignment);
//!
//! assert_eq!(reduced.clause_count(), 1);
//! assert_eq!(reduced.clauses()[0].id(), 2);
//! assert_eq!(assignment.to_string(), "{1, 3, 5}");
//! ```
use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// The pure literals of `formula`, ordered by atom.
pub fn pure_literals(formula: &Formula) -> BTreeSet<CLiteral> {
    let present = formula.literals();

    present
        .iter()
        .filter(|literal| !present.contains(&literal.negate()))
        .map(|literal| (*literal).clone())
        .collect()
}

/// Removes every clause of `formula` containing a pure literal, and records each pure literal in `assignment`.
pub fn pure_elimination(formula: &Formula, assignment: &mut Assignment) -> Formula {
    let mut reduced = formula.clone();

    for pure in pure_literals(formula) {
        reduced = reduced.without_clauses_containing(&pure);
        log::trace!(target: targets::PURE_ELIMINATION, "Pure {pure}");
        assignment.insert(pure);
    }

    reduced
}

#[cfg(test)]
mod pure_tests {
    use super::*;
    use crate::structures::clause::{Clause, LabelledClause};

    fn values(literals: impl IntoIterator<Item = CLiteral>) -> BTreeSet<String> {
        literals
            .into_iter()
            .map(|literal| literal.signed_value())
            .collect()
    }

    fn expected(ints: &[i32]) -> BTreeSet<String> {
        ints.iter().map(|int| int.to_string()).collect()
    }

    mod identification {
        use super::*;

        #[test]
        fn empty_formula() {
            assert!(pure_literals(&Formula::default()).is_empty());
        }

        #[test]
        fn example() {
            let formula = Formula::from_ints(&[
                &[1, 9, 8],
                &[3, 1, 5],
                &[1, 4],
                &[-7, 6, -8, 1, 9],
                &[1, 7, 5],
            ]);
            assert_eq!(values(pure_literals(&formula)), expected(&[6, 3, 5, 9, 1, 4]));
        }

        #[test]
        fn none_pure() {
            let formula = Formula::from_ints(&[&[-1, 4, 5], &[-4, 1], &[-5], &[3, -3]]);
            assert!(pure_literals(&formula).is_empty());
        }

        #[test]
        fn one_pure() {
            let formula = Formula::from_ints(&[&[-1, 4, 5], &[-4, 1], &[-5], &[3]]);
            assert_eq!(values(pure_literals(&formula)), expected(&[3]));
        }

        #[test]
        fn negative_pure() {
            let formula = Formula::from_ints(&[&[-2, 1], &[-1, -2]]);
            assert_eq!(values(pure_literals(&formula)), expected(&[-2]));
        }
    }

    mod elimination {
        use super::*;

        #[test]
        fn empty_formula() {
            let mut assignment = Assignment::default();
            assert!(pure_elimination(&Formula::default(), &mut assignment).is_empty());
            assert!(assignment.is_empty());
        }

        #[test]
        fn example() {
            let formula = Formula::from_ints(&[&[1, 4, -8], &[3, 1, 5], &[8, -4]]);
            let mut assignment = Assignment::default();

            let reduced = pure_elimination(&formula, &mut assignment);
            assert_eq!(
                reduced,
                Formula::new(vec![LabelledClause::new(2, vec![CLiteral::from(8), CLiteral::from(-4)])])
            );
            assert_eq!(assignment.signed_values(), expected(&[1, 3, 5]));
        }

        #[test]
        fn no_elimination() {
            let formula = Formula::from_ints(&[&[1, 4, -8], &[3, -1, 5], &[8, -4], &[-3, -5]]);
            let mut assignment = Assignment::default();

            assert_eq!(pure_elimination(&formula, &mut assignment), formula);
            assert!(assignment.is_empty());
        }

        #[test]
        fn one_pure() {
            let formula = Formula::from_ints(&[
                &[1, 4, -8],
                &[3, -1, 2, 5],
                &[8, 2, -4],
                &[-3, -5],
                &[2],
            ]);
            let mut assignment = Assignment::default();

            let reduced = pure_elimination(&formula, &mut assignment);
            let ids = reduced.clauses().iter().map(|c| c.id()).collect::<Vec<_>>();
            assert_eq!(ids, vec![0, 3]);
            assert_eq!(assignment.signed_values(), expected(&[2]));
        }

        #[test]
        fn removed_clauses_contain_a_pure_literal() {
            let formula = Formula::from_ints(&[&[1, -2], &[2, 3], &[-3, -1], &[4, -1], &[5, -4]]);
            let pure = pure_literals(&formula);
            let mut assignment = Assignment::default();

            let reduced = pure_elimination(&formula, &mut assignment);
            for clause in formula.clauses() {
                let kept = reduced.clauses().contains(clause);
                let has_pure = clause.literals().any(|literal| pure.contains(literal));
                assert_eq!(kept, !has_pure);
            }
        }

        #[test]
        fn single_pass() {
            // Removing the clause of pure 3 makes -1 pure, though -1 waits for the next pass.
            let formula = Formula::from_ints(&[&[3, 1], &[-1, 2], &[-1, -2]]);
            let mut assignment = Assignment::default();

            let reduced = pure_elimination(&formula, &mut assignment);
            assert_eq!(reduced.clause_count(), 2);
            assert_eq!(assignment.signed_values(), expected(&[3]));

            let again = pure_elimination(&reduced, &mut assignment);
            assert!(again.is_empty());
            assert_eq!(assignment.signed_values(), expected(&[-1, 3]));
        }
    }
}
