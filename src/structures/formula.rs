//! Formulas, aka. an ordered sequence of clauses, interpreted as the conjunction of those clauses.
//!
//! A formula is both the problem instance given to a solve and every intermediate state of simplification.
//!
//! ```rust
//! # use dpll_sat::structures::formula::Formula;
//! let formula = Formula::from_ints(&[&[1, -3], &[2, 3, -1]]);
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert!(!formula.has_empty_clause());
//! assert_eq!(formula.atoms().into_iter().collect::<Vec<_>>(), vec!["1", "2", "3"]);
//! ```

use std::collections::BTreeSet;

use crate::{
    structures::{
        clause::{Clause, ClauseId, ClauseKind, LabelledClause},
        language::Language,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A formula, as a sequence of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<LabelledClause>,
}

impl Formula {
    /// A formula with the given clauses, in order.
    pub fn new(clauses: Vec<LabelledClause>) -> Self {
        Formula { clauses }
    }

    /// A formula from clauses of integer literals, with ids assigned sequentially from 0.
    pub fn from_ints(clauses: &[&[i32]]) -> Self {
        clauses
            .iter()
            .enumerate()
            .map(|(id, ints)| LabelledClause::new(id, ints.iter().map(CLiteral::from).collect()))
            .collect()
    }

    pub fn clauses(&self) -> &[LabelledClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses, and so is trivially satisfied.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether some clause of the formula is empty, and so the formula is unsatisfiable.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.kind() == ClauseKind::Empty)
    }

    /// Appends a clause to the formula.
    pub fn push(&mut self, clause: LabelledClause) {
        self.clauses.push(clause)
    }

    /// The formula extended with a unit clause of `literal`, labelled by the current clause count.
    pub fn with_unit(&self, literal: CLiteral) -> Self {
        let mut extended = self.clone();
        extended.push(LabelledClause::unit(self.clause_count(), literal));
        extended
    }

    /// The formula without any clause containing `literal`.
    pub fn without_clauses_containing(&self, literal: &CLiteral) -> Self {
        self.clauses
            .iter()
            .filter(|clause| !clause.contains(literal))
            .cloned()
            .collect()
    }

    /// The distinct atoms which occur in some clause of the formula.
    pub fn atoms(&self) -> BTreeSet<&str> {
        self.clauses.iter().flat_map(|clause| clause.atoms()).collect()
    }

    /// The distinct literals which occur in some clause of the formula.
    pub fn literals(&self) -> BTreeSet<&CLiteral> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .collect()
    }

    /// The language of the formula, with atoms in order of first appearance.
    pub fn language(&self) -> Language {
        self.clauses.iter().flat_map(|clause| clause.atoms()).collect()
    }

    /// Ensures every atom of the formula belongs to `language`.
    pub fn check_against(&self, language: &Language) -> Result<(), err::BuildError> {
        for clause in &self.clauses {
            if let Some(literal) = clause.literals().find(|l| !language.contains(l.atom())) {
                return Err(err::BuildError::UndeclaredAtom(literal.atom().clone()));
            }
        }
        Ok(())
    }
}

impl FromIterator<LabelledClause> for Formula {
    fn from_iter<I: IntoIterator<Item = LabelledClause>>(iter: I) -> Self {
        Formula {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut clauses = self.clauses.iter().peekable();
        write!(f, "{{")?;
        while let Some(clause) = clauses.next() {
            write!(f, "{clause}")?;
            if clauses.peek().is_some() {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}
