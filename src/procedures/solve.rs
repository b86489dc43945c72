/*!
The DPLL search.

# Overview

A search on a formula 𝐅 and an assignment 𝐚 (initially empty):
1. Applies [unit propagation](crate::procedures::unit) to 𝐅, extending 𝐚.
2. Applies [pure literal elimination](crate::procedures::pure) to the result, extending 𝐚.
3. If the result contains the empty clause, 𝐅 is unsatisfiable (on 𝐚).
4. If the result is empty, 𝐅 is satisfiable, and 𝐚 is a witness.
5. Otherwise, some atom *p* of the result is [chosen](crate::procedures::decision) and the search recurses on:
   - The result with the unit clause *p*, and 𝐚 with *p*.
   - If that fails, the result with the unit clause *-p*, and 𝐚 with *-p*.

```rust,ignore
let reduced = pure_elimination(&unit_propagation(&formula, &mut assignment), &mut assignment);
```

# Values

Each branch of the search is given its own formula and assignment, and so no branch observes the changes made by another.
As a consequence, nothing needs to be undone when a branch fails, at the cost of a copy of the formula for each decision.

# Termination

The atom of a decision is fixed by a unit clause, and that unit clause is propagated at the start of the recursive call.
So, each recursive call works on a formula with strictly fewer atoms, and the depth of recursion is at most the number of atoms in the formula.

Still, deep recursion risks exhausting the stack, and so a search is given a depth limit.
Exceeding the limit is an [error](crate::types::err::SearchError::DepthExhausted), distinct from the formula being unsatisfiable.

For the limit to be reached before the stack is exhausted, [solve] and [Search::solve_on_thread] search on a fresh thread with a stack of [stack_size] bytes.
A depth limit too large for any stack is an [error](crate::types::err::SearchError::StackUnavailable).
[Search::solve] instead searches on the stack of the caller.
*/

use crate::{
    misc::log::targets::{self},
    procedures::{decision::Decide, pure::pure_elimination, unit::unit_propagation},
    structures::{
        assignment::Assignment,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The stack given to a search for each level of recursion permitted.
pub const STACK_PER_LEVEL: usize = 16 * 1024;

/// The stack given to a search regardless of the depth limit.
pub const STACK_BASE: usize = 2 * 1024 * 1024;

/// The largest stack given to a search.
pub const STACK_MAX: usize = usize::MAX / 4;

/// The size of the stack, in bytes, given to a search with the depth limit `depth_limit`, if at most [STACK_MAX].
pub fn stack_size(depth_limit: usize) -> Option<usize> {
    depth_limit
        .checked_mul(STACK_PER_LEVEL)
        .and_then(|size| size.checked_add(STACK_BASE))
        .filter(|size| *size <= STACK_MAX)
}

/// The result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The formula is satisfiable, witnessed by the (partial) assignment.
    Satisfiable(Assignment),

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl Outcome {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Outcome::Satisfiable(_))
    }
}

/// Counts for things which happen during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCounts {
    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of every formula found to contain the empty clause.
    pub conflicts: usize,

    /// The deepest level of recursion reached.
    pub max_depth: usize,
}

/// A search, paramaterised by a method of making decisions.
pub struct Search<'d, D: Decide> {
    decider: &'d mut D,
    depth_limit: usize,
    pub counts: SearchCounts,
}

impl<'d, D: Decide> Search<'d, D> {
    pub fn new(decider: &'d mut D, depth_limit: usize) -> Self {
        Search {
            decider,
            depth_limit,
            counts: SearchCounts::default(),
        }
    }

    /// Searches for an assignment which extends `assignment` and satisfies `formula`.
    pub fn solve(
        &mut self,
        formula: Formula,
        assignment: Assignment,
    ) -> Result<Outcome, err::SearchError> {
        self.solve_at(formula, assignment, 0)
    }

    /// As [solve](Search::solve), though on a fresh thread with a stack sized to the depth limit.
    pub fn solve_on_thread(
        &mut self,
        formula: Formula,
        assignment: Assignment,
    ) -> Result<Outcome, err::SearchError>
    where
        D: Send,
    {
        let Some(stack_size) = stack_size(self.depth_limit) else {
            log::error!(target: targets::SEARCH, "No stack for a depth limit of {}", self.depth_limit);
            return Err(err::SearchError::StackUnavailable(self.depth_limit));
        };
        let depth_limit = self.depth_limit;

        std::thread::scope(|scope| {
            let handle = std::thread::Builder::new()
                .name("search".to_string())
                .stack_size(stack_size)
                .spawn_scoped(scope, move || self.solve(formula, assignment));

            let handle = match handle {
                Ok(handle) => handle,
                Err(e) => {
                    log::error!(target: targets::SEARCH, "No stack of {stack_size} bytes: {e}");
                    return Err(err::SearchError::StackUnavailable(depth_limit));
                }
            };

            match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        })
    }

    fn solve_at(
        &mut self,
        formula: Formula,
        mut assignment: Assignment,
        depth: usize,
    ) -> Result<Outcome, err::SearchError> {
        if depth > self.depth_limit {
            log::error!(target: targets::SEARCH, "Depth limit of {} exceeded", self.depth_limit);
            return Err(err::SearchError::DepthExhausted(self.depth_limit));
        }
        self.counts.max_depth = std::cmp::max(self.counts.max_depth, depth);

        let reduced = {
            let propagated = unit_propagation(&formula, &mut assignment);
            pure_elimination(&propagated, &mut assignment)
        };
        drop(formula);

        if reduced.has_empty_clause() {
            log::debug!(target: targets::SEARCH, "Conflict at depth {depth}");
            self.counts.conflicts += 1;
            return Ok(Outcome::Unsatisfiable);
        }

        if reduced.is_empty() {
            log::debug!(target: targets::SEARCH, "Satisfied at depth {depth} by {assignment}");
            return Ok(Outcome::Satisfiable(assignment));
        }

        let atoms = reduced.atoms();
        let Some(atom) = self.decider.choose_atom(&atoms) else {
            return Err(err::SearchError::NoDecision);
        };
        let atom = atom.to_owned();
        self.counts.decisions += 1;

        for polarity in [true, false] {
            let decision = CLiteral::new(atom.clone(), polarity);
            log::debug!(target: targets::SEARCH, "Decision {decision} at depth {depth}");

            let branch_formula = reduced.with_unit(decision.clone());
            let mut branch_assignment = assignment.clone();
            branch_assignment.insert(decision);

            match self.solve_at(branch_formula, branch_assignment, depth + 1)? {
                Outcome::Satisfiable(found) => return Ok(Outcome::Satisfiable(found)),
                Outcome::Unsatisfiable => continue,
            }
        }

        Ok(Outcome::Unsatisfiable)
    }
}

/// Searches for an assignment which satisfies `formula`, making decisions with `decider`.
///
/// The search takes place on a thread with a stack of [stack_size] bytes for `depth_limit`.
///
/// ```rust
/// # use dpll_sat::procedures::{decision::LexicographicDecision, solve::{solve, Outcome}};
/// # use dpll_sat::structures::formula::Formula;
/// let formula = Formula::from_ints(&[&[1], &[-1]]);
/// assert_eq!(solve(&formula, &mut LexicographicDecision, 64), Ok(Outcome::Unsatisfiable));
/// ```
pub fn solve(
    formula: &Formula,
    decider: &mut (impl Decide + Send),
    depth_limit: usize,
) -> Result<Outcome, err::SearchError> {
    Search::new(decider, depth_limit).solve_on_thread(formula.clone(), Assignment::default())
}
