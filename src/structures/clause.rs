//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of the literals of a clause is as a vector of literals, and a clause within a [formula](crate::structures::formula) pairs these literals with an identifier.
//!
//! ```rust
//! # use dpll_sat::structures::literal::CLiteral;
//! # use dpll_sat::structures::clause::{Clause, LabelledClause};
//! let clause = LabelledClause::new(0, vec![CLiteral::from(23), CLiteral::from(-41), CLiteral::from(3)]);
//!
//! assert_eq!(clause.size(), 3);
//! assert!(clause.contains(&CLiteral::from(-41)));
//! assert_eq!(clause.as_dimacs(true), "23 -41 3 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - Clauses are not mutated once built, instead [without](LabelledClause::without) returns a fresh clause.

use crate::structures::literal::{CLiteral, Literal};

/// The identifier of a clause.
///
/// Identifiers are labels for display, and are not guaranteed to be unique within a formula.
pub type ClauseId = usize;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether the clause contains the given literal.
    fn contains(&self, literal: &CLiteral) -> bool {
        self.literals().any(|l| l == literal)
    }
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of the literals of a clause.
pub type CClause = VClause;

impl Clause for VClause {
    fn as_string(&self) -> String {
        let mut the_string = String::from("[");
        for literal in self {
            the_string.push_str(format!("{literal}, ").as_str());
        }
        if !self.is_empty() {
            the_string.truncate(the_string.len() - 2);
        }
        the_string.push(']');
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// A rough distinction between clauses, based on number of literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    /// The clause is empty, and so conflicts with every valuation.
    Empty,

    /// The clause is a single literal.
    Unit,

    /// The clause has at least two literals.
    Long,
}

impl ClauseKind {
    /// Identifies the kind of a clause.
    pub fn identify(clause: &impl Clause) -> Self {
        match clause.size() {
            0 => Self::Empty,

            1 => Self::Unit,

            _long_clause => Self::Long,
        }
    }
}

/// A clause of a formula: literals paired with an identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelledClause {
    id: ClauseId,
    literals: CClause,
}

impl LabelledClause {
    pub fn new(id: ClauseId, literals: CClause) -> Self {
        LabelledClause { id, literals }
    }

    /// The unit clause of `literal`.
    pub fn unit(id: ClauseId, literal: CLiteral) -> Self {
        LabelledClause {
            id,
            literals: vec![literal],
        }
    }

    pub fn id(&self) -> ClauseId {
        self.id
    }

    /// The kind of the clause.
    pub fn kind(&self) -> ClauseKind {
        ClauseKind::identify(self)
    }

    /// The sole literal of a unit clause, and otherwise nothing.
    pub fn unit_literal(&self) -> Option<&CLiteral> {
        match self.literals.as_slice() {
            [literal] => Some(literal),
            _ => None,
        }
    }

    /// A clause with the same id and every occurrence of `literal` removed.
    pub fn without(&self, literal: &CLiteral) -> Self {
        LabelledClause {
            id: self.id,
            literals: self
                .literals
                .iter()
                .filter(|l| *l != literal)
                .cloned()
                .collect(),
        }
    }

    /// An iterator over the atoms of the clause, in order and with repetition.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(|literal| literal.atom().as_str())
    }
}

impl Clause for LabelledClause {
    fn as_string(&self) -> String {
        format!("{}: {}", self.id, self.literals.as_string())
    }

    fn as_dimacs(&self, zero: bool) -> String {
        self.literals.as_dimacs(zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    fn size(&self) -> usize {
        self.literals.len()
    }
}

impl std::fmt::Display for LabelledClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn clause(id: ClauseId, ints: &[i32]) -> LabelledClause {
        LabelledClause::new(id, ints.iter().map(CLiteral::from).collect())
    }

    #[test]
    fn kinds() {
        assert_eq!(clause(0, &[]).kind(), ClauseKind::Empty);
        assert_eq!(clause(0, &[-2]).kind(), ClauseKind::Unit);
        assert_eq!(clause(0, &[1, 2]).kind(), ClauseKind::Long);
    }

    #[test]
    fn without_keeps_id_and_order() {
        let the_clause = clause(4, &[1, -3, 2, -3]);
        let stripped = the_clause.without(&CLiteral::from(-3));
        assert_eq!(stripped, clause(4, &[1, 2]));
        assert_eq!(the_clause.size(), 4);
    }

    #[test]
    fn strings() {
        assert_eq!(clause(2, &[1, -3]).as_string(), "2: [1, -3]");
        assert_eq!(clause(2, &[]).as_string(), "2: []");
        assert_eq!(clause(2, &[1, -3]).as_dimacs(false), "1 -3");
    }
}
