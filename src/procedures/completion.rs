//! Completion of a (partial) assignment to a full assignment.
//!
//! A satisfying assignment found by a [search](crate::procedures::solve) need not mention every atom of the language, as atoms may be removed from a formula without being given a value.
//! Such atoms are irrelevant to the satisfiability of the formula, and so are given the value true.
//!
//! ```rust
//! # use dpll_sat::procedures::completion::complete;
//! # use dpll_sat::structures::{assignment::Assignment, language::Language, literal::CLiteral};
//! let language: Language = ["1", "2", "3", "4", "5"].into_iter().collect();
//! let partial: Assignment = [-1, 2, -4].iter().map(CLiteral::from).collect();
//!
//! let full = complete(&language, &partial).unwrap();
//! let values = full.iter().map(|l| l.to_string()).collect::<Vec<_>>();
//! assert_eq!(values, vec!["-1", "2", "3", "-4", "5"]);
//! ```

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        language::Language,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A full assignment extending `partial`, with a literal for each atom of `language` (in order), followed by any other literals of `partial`.
///
/// Returns an error if `partial` contains both literals of some atom.
pub fn complete(language: &Language, partial: &Assignment) -> Result<Vec<CLiteral>, err::AssignmentError> {
    if let Some(atom) = partial.contradiction() {
        log::error!(target: targets::COMPLETION, "Both literals of {atom} are assigned");
        return Err(err::AssignmentError::Contradiction(atom.clone()));
    }

    let mut full = Vec::with_capacity(language.count());
    for atom in language.atoms() {
        let polarity = match partial.value_of(atom) {
            Some(value) => value,
            None => {
                log::trace!(target: targets::COMPLETION, "Default value for {atom}");
                true
            }
        };
        full.push(CLiteral::new(atom.to_owned(), polarity));
    }

    full.extend(
        partial
            .literals()
            .filter(|literal| !language.contains(literal.atom()))
            .cloned(),
    );

    Ok(full)
}
