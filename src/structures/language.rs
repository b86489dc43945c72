/*!
The language of a formula, aka. the variable universe.

A language is the set of atoms of some formula, ordered by first appearance and without duplicates.

```rust
# use dpll_sat::structures::language::Language;
let mut language = Language::default();
assert!(language.add("2"));
assert!(language.add("1"));
assert!(!language.add("2"));

assert_eq!(language.atoms().collect::<Vec<_>>(), vec!["2", "1"]);
```
*/

use std::collections::HashSet;

use crate::{
    structures::atom::{self, Atom},
    types::err::{self},
};

/// The atoms of a formula, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Language {
    atoms: Vec<Atom>,
    index: HashSet<Atom>,
}

impl Language {
    /// A language of exactly the given atoms, so long as each atom is [valid](atom::is_valid).
    ///
    /// ```rust
    /// # use dpll_sat::structures::language::Language;
    /// # use dpll_sat::types::err::BuildError;
    /// assert!(Language::fixed(["p", "q"]).is_ok());
    /// assert_eq!(Language::fixed(["p", "-q"]), Err(BuildError::InvalidAtom("-q".to_string())));
    /// ```
    pub fn fixed<'a>(atoms: impl IntoIterator<Item = &'a str>) -> Result<Self, err::BuildError> {
        let mut language = Language::default();
        for name in atoms {
            language.add(&atom::checked(name)?);
        }
        Ok(language)
    }

    /// Adds `atom` to the language, returning true if the atom is fresh.
    pub fn add(&mut self, atom: &str) -> bool {
        match self.index.contains(atom) {
            true => false,
            false => {
                self.index.insert(atom.to_owned());
                self.atoms.push(atom.to_owned());
                true
            }
        }
    }

    pub fn contains(&self, atom: &str) -> bool {
        self.index.contains(atom)
    }

    /// The atoms of the language, in order of first appearance.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|atom| atom.as_str())
    }

    pub fn count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Language {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut language = Language::default();
        for atom in iter {
            language.add(atom);
        }
        language
    }
}

#[cfg(test)]
mod language_tests {
    use super::*;

    #[test]
    fn first_appearance() {
        let language = ["3", "1", "3", "2", "1"].into_iter().collect::<Language>();
        assert_eq!(language.atoms().collect::<Vec<_>>(), vec!["3", "1", "2"]);
        assert_eq!(language.count(), 3);
    }

    #[test]
    fn fixed_rejects_invalid_atoms() {
        assert_eq!(Language::fixed([""]), Err(err::BuildError::InvalidAtom(String::new())));
        assert_eq!(
            Language::fixed(["p q"]),
            Err(err::BuildError::InvalidAtom("p q".to_string()))
        );
        assert!(Language::fixed(std::iter::empty()).is_ok_and(|language| language.is_empty()));
    }
}
