/*!
Assignments, aka. (partial) valuations represented as sets of literals.

An assignment is a set of literals, read as the valuation on which each literal in the set is true.
So, an atom has value true if the positive literal of the atom is in the set, false if the negative literal is in the set, and otherwise no value.

```rust
# use dpll_sat::structures::assignment::Assignment;
# use dpll_sat::structures::literal::CLiteral;
let mut assignment = Assignment::default();
assignment.insert(CLiteral::from(3));
assignment.insert(CLiteral::from(-10));

assert_eq!(assignment.value_of("3"), Some(true));
assert_eq!(assignment.value_of("10"), Some(false));
assert_eq!(assignment.value_of("7"), None);

assert_eq!(assignment.to_string(), "{-10, 3}");
```

# Consistency

A consistent assignment contains at most one literal for each atom.
Insertion does not check consistency, as within a solve a contradictory pair is always witnessed by an empty clause.
Instead, [contradiction](Assignment::contradiction) may be used to check an assignment at a boundary.
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// A set of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    literals: BTreeSet<CLiteral>,
}

impl Assignment {
    /// Adds `literal` to the assignment, returning true if the literal was not already present.
    pub fn insert(&mut self, literal: CLiteral) -> bool {
        self.literals.insert(literal)
    }

    pub fn contains(&self, literal: &CLiteral) -> bool {
        self.literals.contains(literal)
    }

    /// The value of `atom` on the assignment, if any.
    ///
    /// If both literals of the atom are present, the positive literal is preferred.
    pub fn value_of(&self, atom: &str) -> Option<bool> {
        if self.contains(&CLiteral::new(atom.to_owned(), true)) {
            Some(true)
        } else if self.contains(&CLiteral::new(atom.to_owned(), false)) {
            Some(false)
        } else {
            None
        }
    }

    /// Some atom with both literals in the assignment, if one exists.
    pub fn contradiction(&self) -> Option<&Atom> {
        self.literals
            .iter()
            .find(|literal| !literal.polarity() && self.contains(&literal.negate()))
            .map(|literal| literal.atom())
    }

    /// An iterator over the literals of the assignment, ordered by atom and then polarity.
    pub fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    /// The signed values of the literals in the assignment.
    pub fn signed_values(&self) -> BTreeSet<String> {
        self.literals.iter().map(|literal| literal.signed_value()).collect()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl FromIterator<CLiteral> for Assignment {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(iter: I) -> Self {
        Assignment {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self
            .literals
            .iter()
            .map(|literal| literal.signed_value())
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", values.join(", "))
    }
}
