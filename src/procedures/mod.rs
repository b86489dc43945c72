/*!
The procedures of a solve.

Each procedure is a function from a formula (and perhaps an assignment) to a fresh formula (and perhaps an extended assignment).
None of the procedures mutate a formula in place.

- [unit] propagation and [pure] literal elimination simplify a formula.
- [decision] abstracts the choice of atom on which to branch.
- [solve] is the DPLL search, built from the above.
- [completion] extends a satisfying assignment to every atom of a language.
- [evaluate] checks a model against a formula.
*/

pub mod completion;
pub mod decision;
pub mod evaluate;
pub mod pure;
pub mod solve;
pub mod unit;
