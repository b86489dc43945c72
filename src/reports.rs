/*!
Reports for the context.
*/

use crate::{
    context::ContextState,
    structures::{clause::Clause, literal::CLiteral},
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, e.g. as no solve has taken place.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable(_) => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The literals of a model as a DIMACS value line, without the leading `v`.
///
/// ```rust
/// # use dpll_sat::reports::model_string;
/// # use dpll_sat::structures::literal::CLiteral;
/// assert_eq!(model_string(&[CLiteral::from(2), CLiteral::from(-1)]), "2 -1 0");
/// assert_eq!(model_string(&[]), "0");
/// ```
pub fn model_string(model: &[CLiteral]) -> String {
    model.to_vec().as_dimacs(true)
}
