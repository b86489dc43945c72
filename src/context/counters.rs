use std::time::Duration;

use crate::procedures::solve::SearchCounts;

/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// The deepest level of recursion reached during a solve.
    pub max_depth: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Counters {
    /// Adds the counts of a search.
    pub fn record(&mut self, counts: SearchCounts) {
        self.total_decisions += counts.decisions;
        self.total_conflicts += counts.conflicts;
        self.max_depth = std::cmp::max(self.max_depth, counts.max_depth);
    }
}
