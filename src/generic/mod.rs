//! Generic structures and methods, used by but not specific to a solve.

pub mod random;
pub mod random_formula;

pub use random_formula::random_formula;
