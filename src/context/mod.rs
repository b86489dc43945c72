/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness used for [random decisions](crate::procedures::decision::RandomDecision).

In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p_q_clause = vec![CLiteral::from(1), CLiteral::from(2)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = vec![CLiteral::from(-1)];
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

let model = the_context.model().expect("no model");
assert_eq!(model, vec![CLiteral::from(1).negate(), CLiteral::from(2)]);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::structures::assignment::Assignment;

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The formula of the context is satisfiable, witnessed by the (partial) assignment.
    Satisfiable(Assignment),

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// The consistency of the formula is unknown.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
