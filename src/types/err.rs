//! Error types used in the library.
//!
//! - None of these are used to signal an unsatisfiable formula, which is a result rather than an error.
//! - Most errors are boundary errors, e.g. a clause read from DIMACS which mentions an invalid atom.
//! - Within a solve the only error is exhaustion of the configured recursion depth.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Assignment(AssignmentError),
    Build(BuildError),
    Parse(ParseError),
    Search(SearchError),
    State(StateError),

    /// A model failed to satisfy the formula it was found for.
    InvalidModel,
}

/// Errors when completing an assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssignmentError {
    /// Both literals of the atom are present.
    Contradiction(Atom),
}

impl From<AssignmentError> for ErrorKind {
    fn from(e: AssignmentError) -> Self {
        ErrorKind::Assignment(e)
    }
}

/// Noted errors when building a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause mentions an atom outside of the declared language.
    UndeclaredAtom(Atom),

    /// The string is not an atom, e.g. as it is empty or begins with '-'.
    InvalidAtom(String),

    /// The input ended before the terminating `0` of some clause.
    UnterminatedClause,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A negation character was read, but no candidate for negation was found.
    Negation(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// The recursion depth exceeded the limit, given.
    DepthExhausted(usize),

    /// No stack could be given to a search with the given depth limit.
    StackUnavailable(usize),

    /// No atom was available for a decision on a formula which was neither empty nor contained the empty clause.
    /// This is unexpected.
    NoDecision,
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Information about a solve was requested before a solve.
    NotSolved,

    /// A model was requested from an unsatisfiable formula.
    NoModel,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
