//! Random formulas, for testing and benchmarking.
//!
//! A random formula over *n* atoms has atoms named "1" to "*n*", and each clause:
//! - Has some number of literals *k*, chosen uniformly from 0 to *n* (inclusive).
//! - Has *k* distinct atoms, chosen uniformly.
//! - Gives each atom a polarity, chosen uniformly.
//!
//! So, a random formula may contain the empty clause, and will often be unsatisfiable when there are many more clauses than atoms.
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use dpll_sat::generic::{random::MinimalPCG32, random_formula};
//! let mut rng = MinimalPCG32::from_seed(5_u64.to_le_bytes());
//! let (language, formula) = random_formula(&mut rng, 6, 12);
//!
//! assert_eq!(language.count(), 6);
//! assert_eq!(formula.clause_count(), 12);
//! assert!(formula.clauses().iter().all(|clause| clause.atoms().all(|atom| language.contains(atom))));
//! ```

use rand::{seq::index, Rng};

use crate::structures::{
    clause::LabelledClause,
    formula::Formula,
    language::Language,
    literal::{CLiteral, Literal},
};

/// A random formula of `clause_count` clauses over `atom_count` atoms, together with the language of those atoms.
///
/// Clause identifiers are sequential, from `0`.
pub fn random_formula(rng: &mut impl Rng, atom_count: usize, clause_count: usize) -> (Language, Formula) {
    let atoms: Vec<String> = (1..=atom_count).map(|atom| atom.to_string()).collect();
    let language = atoms.iter().map(String::as_str).collect::<Language>();

    let clauses = (0..clause_count)
        .map(|id| {
            let size = rng.random_range(0..=atom_count);
            let literals = index::sample(rng, atom_count, size)
                .into_iter()
                .map(|position| CLiteral::new(atoms[position].clone(), rng.random_bool(0.5)))
                .collect();
            LabelledClause::new(id, literals)
        })
        .collect::<Formula>();

    (language, clauses)
}

#[cfg(test)]
mod random_formula_tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{generic::random::MinimalPCG32, structures::clause::Clause};
    use rand::SeedableRng;

    #[test]
    fn nothing() {
        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let (language, formula) = random_formula(&mut rng, 0, 0);
        assert!(language.is_empty());
        assert!(formula.is_empty());
    }

    #[test]
    fn no_atoms() {
        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let (language, formula) = random_formula(&mut rng, 0, 4);
        assert!(language.is_empty());
        assert_eq!(formula.clause_count(), 4);
        assert!(formula.clauses().iter().all(|clause| clause.size() == 0));
    }

    #[test]
    fn no_clauses() {
        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let (language, formula) = random_formula(&mut rng, 5, 0);
        assert_eq!(language.atoms().collect::<Vec<_>>(), vec!["1", "2", "3", "4", "5"]);
        assert!(formula.is_empty());
    }

    #[test]
    fn within_range() {
        let mut rng = MinimalPCG32::from_seed(19_u64.to_le_bytes());
        for atom_count in 1..8 {
            let (language, formula) = random_formula(&mut rng, atom_count, 20);
            assert_eq!(language.count(), atom_count);

            for (index, clause) in formula.clauses().iter().enumerate() {
                assert_eq!(clause.id(), index);
                assert!(clause.size() <= atom_count);

                let atoms = clause.atoms().collect::<HashSet<_>>();
                assert_eq!(atoms.len(), clause.size());
                assert!(atoms.iter().all(|atom| language.contains(atom)));
            }
        }
    }

    #[test]
    fn seeded() {
        let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());
        let (_, formula) = random_formula(&mut rng, 6, 10);

        let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());
        let (_, again) = random_formula(&mut rng, 6, 10);

        assert_eq!(formula, again);
    }
}
