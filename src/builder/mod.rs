/*!
Tools for building a context.

# Basic methods

The library has two methods for building a context:
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.
- [read_dimacs](crate::context::GenericContext::read_dimacs), to add each clause of some DIMACS input.

In either case, the [language](crate::structures::language) of the context is extended with each fresh atom, in order of first appearance, and each clause is given the next sequential identifier.

Alternatively, a context may be built from a language and formula by [from_parts](crate::context::Context::from_parts), in which case the formula is checked against the language.

# Examples

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::literal::{CLiteral, Literal};
#
let mut the_context = Context::from_config(Config::default());

let clause_a = vec![CLiteral::new("p".to_string(), true), CLiteral::new("q".to_string(), false)];
let clause_b = vec![CLiteral::new("p".to_string(), false), CLiteral::new("q".to_string(), true)];

assert_eq!(the_context.add_clause(clause_a), Ok(0));
assert_eq!(the_context.add_clause(clause_b), Ok(1));

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

Atoms are checked as clauses are added.

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::structures::literal::{CLiteral, Literal};
# use dpll_sat::types::err::{BuildError, ErrorKind};
let mut the_context = Context::from_config(Config::default());

let clause = vec![CLiteral::new("p q".to_string(), true)];
assert_eq!(
    the_context.add_clause(clause),
    Err(ErrorKind::Build(BuildError::InvalidAtom("p q".to_string())))
);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{ContextState, GenericContext},
    structures::{
        atom::{self},
        clause::{ClauseId, LabelledClause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Methods for building the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause of the given literals to the context, returning the identifier of the clause.
    ///
    /// The literals are kept as given, including any repetition.
    /// If the context holds the result of some previous solve, the result is discarded.
    pub fn add_clause(
        &mut self,
        literals: impl IntoIterator<Item = CLiteral>,
    ) -> Result<ClauseId, err::ErrorKind> {
        let literals = literals.into_iter().collect::<Vec<_>>();

        if let Some(invalid) = literals.iter().find(|l| !atom::is_valid(l.atom())) {
            return Err(err::ErrorKind::from(err::BuildError::InvalidAtom(
                invalid.atom().clone(),
            )));
        }

        for literal in &literals {
            self.language.add(literal.atom());
        }

        let id = self.formula.clause_count();
        self.formula.push(LabelledClause::new(id, literals));
        self.state = ContextState::Input;

        Ok(id)
    }
}

#[cfg(test)]
mod builder_tests {
    use crate::{config::Config, context::Context, structures::clause::Clause};

    use super::*;

    #[test]
    fn sequential_ids_and_language_order() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(the_context.add_clause([CLiteral::from(3), CLiteral::from(-1)]), Ok(0));
        assert_eq!(the_context.add_clause([CLiteral::from(1), CLiteral::from(2)]), Ok(1));
        assert_eq!(the_context.add_clause(Vec::<CLiteral>::new()), Ok(2));

        assert_eq!(the_context.language.atoms().collect::<Vec<_>>(), vec!["3", "1", "2"]);
        assert_eq!(the_context.formula.clause_count(), 3);
        assert_eq!(the_context.state, ContextState::Input);
    }

    #[test]
    fn multiplicity_is_kept() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context
            .add_clause([CLiteral::from(1), CLiteral::from(1), CLiteral::from(-2)])
            .is_ok());
        assert_eq!(the_context.formula.clauses()[0].size(), 3);
    }

    #[test]
    fn invalid_atoms_leave_the_context_unchanged() {
        let mut the_context = Context::from_config(Config::default());
        let clause = [CLiteral::from(1), CLiteral::new(String::new(), true)];

        assert!(the_context.add_clause(clause).is_err());
        assert!(the_context.language.is_empty());
        assert!(the_context.formula.is_empty());
    }
}
