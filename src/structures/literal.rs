//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new("79".to_owned(), true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), "79");
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().signed_value(), "-79");
//!
//! assert_eq!(literal, "79".parse::<CLiteral>().unwrap());
//! ```
//!
//! # Signed values
//!
//! The *signed value* of a literal is a single token combining atom and polarity, e.g. `5` or `-5`.
//! Two literals are equal if and only if their signed values are equal, and so literals stand in for signed values throughout elimination and in [assignments](crate::structures::assignment).
//!
//! A literal is also [Ord] and [Hash](std::hash::Hash), so literals may be kept in ordered or hashed sets.
//! The order is by atom (as a string) and then polarity, with negative before positive.

use crate::{
    structures::atom::{self, Atom},
    types::err::{self},
};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> &Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The signed value of the literal: the atom, prefixed with '-' if the polarity is false.
    fn signed_value(&self) -> String;
}

/// The representation of a literal as an atom paired with a boolean.
///
/// Derived ordering follows field order, and so literals are ordered by atom and then polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> &Atom {
        &self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn signed_value(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "{}{}", atom::NEGATION, self.atom),
        }
    }
}

// From

impl std::str::FromStr for ABLiteral {
    type Err = err::BuildError;

    /// Parses a signed value, e.g. `-5` or `p`.
    fn from_str(signed_value: &str) -> Result<Self, Self::Err> {
        match signed_value.strip_prefix(atom::NEGATION) {
            Some(name) => Ok(ABLiteral::new(atom::checked(name)?, false)),
            None => Ok(ABLiteral::new(atom::checked(signed_value)?, true)),
        }
    }
}

impl From<i32> for ABLiteral {
    fn from(value: i32) -> Self {
        ABLiteral::new(value.unsigned_abs().to_string(), value.is_positive())
    }
}

impl From<&i32> for ABLiteral {
    fn from(value: &i32) -> Self {
        ABLiteral::from(*value)
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn signed_values() {
        assert_eq!(CLiteral::from(5).signed_value(), "5");
        assert_eq!(CLiteral::from(-5).signed_value(), "-5");
        assert_eq!(CLiteral::from(-5), CLiteral::from(5).negate());
    }

    #[test]
    fn parse() {
        assert_eq!("-10".parse::<CLiteral>(), Ok(CLiteral::from(-10)));
        assert_eq!(
            "--10".parse::<CLiteral>(),
            Err(err::BuildError::InvalidAtom("-10".to_owned()))
        );
        assert_eq!(
            "-".parse::<CLiteral>(),
            Err(err::BuildError::InvalidAtom(String::new()))
        );
    }

    #[test]
    fn ordering() {
        let mut literals = vec![CLiteral::from(2), CLiteral::from(-1), CLiteral::from(1)];
        literals.sort();
        assert_eq!(
            literals,
            vec![CLiteral::from(-1), CLiteral::from(1), CLiteral::from(2)]
        );
    }
}
