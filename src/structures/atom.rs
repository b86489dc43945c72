/*!
Atoms (aka. 'variables').

An atom is a name to which assigning a (boolean) value is of interest.

Atoms are opaque strings of non-whitespace characters which do not begin with '-' (a minus sign), as a leading minus sign is reserved for the negation of a literal.
Conventionally atoms are positive integers written as text, as in DIMACS input, though nothing in the library relies on this.

```rust
# use dpll_sat::structures::atom::{self};
assert!(atom::is_valid("96"));
assert!(atom::is_valid("atom_one"));

assert!(!atom::is_valid("-p"));
assert!(!atom::is_valid("a b"));
assert!(!atom::is_valid(""));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- Atoms are compared by name only.
*/

use crate::types::err::{self};

/// An atom, aka. a 'variable'.
pub type Atom = String;

/// The character used to mark negative polarity.
pub const NEGATION: char = '-';

/// Whether `name` may be used as an atom.
pub fn is_valid(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(NEGATION)
        && !name.chars().any(|character| character.is_whitespace())
}

/// An owned atom from `name`, or an error if `name` is not a valid atom.
pub fn checked(name: &str) -> Result<Atom, err::BuildError> {
    match is_valid(name) {
        true => Ok(name.to_owned()),
        false => Err(err::BuildError::InvalidAtom(name.to_owned())),
    }
}
