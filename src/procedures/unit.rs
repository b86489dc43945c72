/*!
Unit propagation.

A unit clause forces the value of its literal, and so propagation of a unit clause *l*:
- Removes every clause which contains *l*, as such clauses are satisfied.
- Removes *-l* from every remaining clause, as *-l* is false.
- Adds *l* to the assignment.

# A single pass

Propagation is applied to those clauses which are unit at the start of a call to [unit_propagation], and to those clauses only.
So, if removing *-l* from a clause leaves a fresh unit clause, the fresh unit clause is not propagated until the next call (in practice, at the next level of a [search](crate::procedures::solve)).

Further, the unit clauses themselves are kept in the formula, and so are left to [pure literal elimination](crate::procedures::pure) or the next pass.

# Conflicts

Propagation does not check for conflicts.
If both *l* and *-l* are unit clauses, both are propagated and both literals are added to the assignment.
Though, as each propagation removes the other literal, both unit clauses are reduced to the empty clause, and the conflict is found through [has_empty_clause](crate::structures::formula::Formula::has_empty_clause).

```rust
# use dpll_sat::procedures::unit::unit_propagation;
# use dpll_sat::structures::{assignment::Assignment, formula::Formula};
let formula = Formula::from_ints(&[&[1], &[-1, 3], &[1, 2]]);
let mut assignment = Assignment::default();

let reduced = unit_propagation(&formula, &mut assignment);

assert_eq!(reduced, Formula::from_ints(&[&[1], &[3]]));
assert_eq!(assignment.to_string(), "{1}");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        clause::{Clause, ClauseKind, LabelledClause},
        formula::Formula,
        literal::Literal,
    },
};

/// The unit clauses of a formula, in order.
pub fn unit_clauses(formula: &Formula) -> Vec<&LabelledClause> {
    formula
        .clauses()
        .iter()
        .filter(|clause| clause.kind() == ClauseKind::Unit)
        .collect()
}

/// Propagates each unit clause of `formula`, returning the reduced formula and recording each unit literal in `assignment`.
pub fn unit_propagation(formula: &Formula, assignment: &mut Assignment) -> Formula {
    // Each clause of the working formula is paired with whether the clause was a unit at the start of the pass.
    let mut working: Vec<(bool, LabelledClause)> = formula
        .clauses()
        .iter()
        .map(|clause| (clause.kind() == ClauseKind::Unit, clause.clone()))
        .collect();

    for unit_clause in unit_clauses(formula) {
        let Some(specified) = unit_clause.unit_literal() else {
            continue;
        };
        let opposite = specified.negate();

        working.retain(|(is_unit, clause)| *is_unit || !clause.contains(specified));

        for (_, clause) in working.iter_mut() {
            if clause.contains(&opposite) {
                *clause = clause.without(&opposite);
            }
        }

        log::trace!(target: targets::UNIT_PROPAGATION, "Unit {specified} from clause {}", unit_clause.id());
        assignment.insert(specified.clone());
    }

    working.into_iter().map(|(_, clause)| clause).collect()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::structures::{clause::ClauseId, literal::CLiteral};

    fn labelled(clauses: &[(ClauseId, &[i32])]) -> Formula {
        clauses
            .iter()
            .map(|(id, ints)| LabelledClause::new(*id, ints.iter().map(CLiteral::from).collect()))
            .collect()
    }

    fn values(assignment: &Assignment) -> Vec<String> {
        assignment.signed_values().into_iter().collect()
    }

    mod collection {
        use super::*;

        #[test]
        fn empty_formula() {
            assert!(unit_clauses(&Formula::default()).is_empty());
        }

        #[test]
        fn has_empty() {
            let formula = Formula::from_ints(&[&[1, 5], &[], &[-1, 6], &[5]]);
            let units = unit_clauses(&formula);
            assert_eq!(units.len(), 1);
            assert_eq!(units[0], &LabelledClause::new(3, vec![CLiteral::from(5)]));
        }

        #[test]
        fn only_unit() {
            let formula = Formula::from_ints(&[&[1], &[3], &[-1]]);
            let units = unit_clauses(&formula);
            assert_eq!(units.into_iter().cloned().collect::<Formula>(), formula);
        }

        #[test]
        fn no_unit() {
            let formula = Formula::from_ints(&[&[1, 9, 8], &[3, 5], &[-1, 4]]);
            assert!(unit_clauses(&formula).is_empty());
        }

        #[test]
        fn mixed() {
            let formula = Formula::from_ints(&[&[1, 9, 8], &[3, 5], &[-1], &[10], &[4]]);
            let units = unit_clauses(&formula);
            assert_eq!(
                units.into_iter().cloned().collect::<Formula>(),
                labelled(&[(2, &[-1]), (3, &[10]), (4, &[4])])
            );
        }
    }

    mod propagation {
        use super::*;

        #[test]
        fn empty_formula() {
            let mut assignment = Assignment::default();
            let formula = unit_propagation(&Formula::default(), &mut assignment);
            assert!(formula.is_empty());
            assert!(assignment.is_empty());
        }

        #[test]
        fn example() {
            let formula = Formula::from_ints(&[
                &[1, 9, 8, 3],
                &[3],
                &[-1, -3],
                &[-10],
                &[4, -10, 6, 3],
                &[1, 2, 10],
            ]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(
                reduced,
                labelled(&[(1, &[3]), (2, &[-1]), (3, &[-10]), (5, &[1, 2])])
            );
            assert_eq!(values(&assignment), vec!["-10", "3"]);
        }

        #[test]
        fn has_empty() {
            let formula = Formula::from_ints(&[&[1], &[], &[-1, 6], &[5, 6]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(
                reduced,
                labelled(&[(0, &[1]), (1, &[]), (2, &[6]), (3, &[5, 6])])
            );
            assert_eq!(values(&assignment), vec!["1"]);
        }

        #[test]
        fn duplicate_units_are_kept() {
            let formula = Formula::from_ints(&[&[1], &[3], &[1]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(reduced, formula);
            assert_eq!(values(&assignment), vec!["1", "3"]);
        }

        #[test]
        fn no_unit() {
            let formula = Formula::from_ints(&[&[1, 9, 8], &[3, 5], &[-1, 4]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(reduced, formula);
            assert!(assignment.is_empty());
        }

        #[test]
        fn opposite_units() {
            let formula = Formula::from_ints(&[&[1], &[3, 1, 5], &[-1], &[4, 5, -1]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(reduced, labelled(&[(0, &[]), (2, &[]), (3, &[4, 5])]));
            assert!(reduced.has_empty_clause());
            assert_eq!(values(&assignment), vec!["-1", "1"]);
        }

        #[test]
        fn unit_without_elimination() {
            let clauses: &[&[i32]] = &[
                &[1, 9, 8],
                &[3, 5],
                &[-1, 4],
                &[7, 6, -8, 9],
                &[15],
                &[1, 7, 5],
            ];
            let formula = Formula::from_ints(clauses);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(reduced, formula);
            assert_eq!(values(&assignment), vec!["15"]);
        }

        #[test]
        fn fresh_units_wait() {
            let formula = Formula::from_ints(&[&[1], &[-1, 2], &[-2, 3]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert_eq!(reduced, labelled(&[(0, &[1]), (1, &[2]), (2, &[-2, 3])]));
            assert_eq!(values(&assignment), vec!["1"]);
        }

        #[test]
        fn clauses_never_grow() {
            let formula = Formula::from_ints(&[&[1, 2], &[-2], &[2, 3], &[-1, 2, -3]]);
            let mut assignment = Assignment::default();

            let reduced = unit_propagation(&formula, &mut assignment);
            assert!(reduced.clause_count() <= formula.clause_count());
            for literal in assignment.literals() {
                assert!(unit_clauses(&formula)
                    .iter()
                    .any(|clause| clause.unit_literal() == Some(literal)));
            }
        }
    }
}
