/*!
Methods for choosing the atom on which to branch.

# Overview

Whenever a [search](crate::procedures::solve) can neither conclude the formula is satisfiable nor unsatisfiable, some atom of the (simplified) formula is chosen, and the search branches on the atom being true and then false.

Which atom is chosen has no bearing on whether the search is sound and complete, as both values of an atom are explored before the atom is given up on.
Still, the choice has a large effect on the course of the search, and so the choice is abstracted to the [Decide] trait.

- [RandomDecision] chooses uniformly at random, given some source of rng.
- [LexicographicDecision] chooses the (lexicographically) least atom, and so is deterministic.

```rust
# use std::collections::BTreeSet;
# use dpll_sat::procedures::decision::{Decide, LexicographicDecision};
let atoms = BTreeSet::from(["3", "10", "2"]);
assert_eq!(LexicographicDecision.choose_atom(&atoms), Some("10"));
```

# Randomness

A random decision borrows a source of rng, so the sequence of decisions made is fixed by the seed of the source.

```rust
# use std::collections::BTreeSet;
# use rand::SeedableRng;
# use dpll_sat::generic::random::MinimalPCG32;
# use dpll_sat::procedures::decision::{Decide, RandomDecision};
let atoms = BTreeSet::from(["1", "2", "3"]);
let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());

let chosen = RandomDecision::new(&mut rng).choose_atom(&atoms);
assert!(chosen.is_some_and(|atom| atoms.contains(atom)));
```
*/

use std::collections::BTreeSet;

use rand::{seq::IteratorRandom, Rng};

use crate::misc::log::targets::{self};

/// A policy for choosing the atom on which to branch.
pub trait Decide {
    /// Some atom from `atoms`, or nothing if `atoms` is empty.
    fn choose_atom<'a>(&mut self, atoms: &BTreeSet<&'a str>) -> Option<&'a str>;
}

/// Choose an atom uniformly at random.
pub struct RandomDecision<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> RandomDecision<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        RandomDecision { rng }
    }
}

impl<R: Rng> Decide for RandomDecision<'_, R> {
    fn choose_atom<'a>(&mut self, atoms: &BTreeSet<&'a str>) -> Option<&'a str> {
        let chosen = atoms.iter().copied().choose(&mut *self.rng);
        log::trace!(target: targets::DECISION, "Random choice of {chosen:?} from {} atoms", atoms.len());
        chosen
    }
}

/// Choose the least atom, by the ordering on strings.
///
/// Note, strings are ordered lexicographically, and so "10" is less than "2".
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicographicDecision;

impl Decide for LexicographicDecision {
    fn choose_atom<'a>(&mut self, atoms: &BTreeSet<&'a str>) -> Option<&'a str> {
        atoms.first().copied()
    }
}
